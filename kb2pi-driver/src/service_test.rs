extern crate std;

use kb2pi_common::translate;

use crate::{
    config::DriverConfig,
    decoder::{DirectDecoder, Set2Decoder},
    keymap::Keymap,
    sink_test_stub::TestSink,
    uart_test_stub::TestUart,
};

use super::*;

fn set2_config() -> DriverConfig {
    DriverConfig::new(Keymap::new(translate::SET2_KEYMAP), 270).unwrap()
}

macro_rules! setup {
    ($uart:ident, $sink:ident, $service:ident: $decoder:expr, $config:expr) => {
        let $uart = TestUart::default();
        let $sink = TestSink::default();
        #[allow(unused_mut)]
        let mut $service =
            KeyboardService::start($uart.clone(), $decoder, &$sink, $config).unwrap();
    };
}

#[test]
fn start_enables_the_port_with_the_configured_divisor() {
    setup!(uart, _sink, _service: Set2Decoder::new(), set2_config());
    assert!(uart.is_enabled());
    assert_eq!(uart.divisor(), 270);
}

#[test]
fn no_pending_interrupt_is_not_handled() {
    setup!(_uart, sink, service: Set2Decoder::new(), set2_config());
    assert_eq!(service.on_interrupt(), IrqStatus::NotHandled);
    assert!(sink.keys.borrow().is_empty());
}

#[test]
fn single_press() {
    setup!(uart, sink, service: Set2Decoder::new(), set2_config());
    uart.push(&[0x1c]);
    assert_eq!(service.on_interrupt(), IrqStatus::Handled);
    assert_eq!(&*sink.keys.borrow(), &[(30, true)]);
    assert_eq!(sink.syncs.get(), 1);
}

#[test]
fn break_sequence_in_one_drain() {
    setup!(uart, sink, service: Set2Decoder::new(), set2_config());
    uart.push(&[0xf0, 0x1c]);
    assert_eq!(service.on_interrupt(), IrqStatus::Handled);
    assert_eq!(&*sink.keys.borrow(), &[(30, false)]);
}

#[test]
fn extended_and_pause_sequences() {
    setup!(uart, sink, service: Set2Decoder::new(), set2_config());
    uart.push(&[0xe0, 0x75]);
    uart.push(&[0xe1, 0x14, 0x77]);
    assert_eq!(service.on_interrupt(), IrqStatus::Handled);
    assert_eq!(&*sink.keys.borrow(), &[(103, true), (119, true)]);
    assert_eq!(sink.syncs.get(), 2);
}

#[test]
fn whole_fifo_is_drained_by_one_interrupt() {
    setup!(uart, sink, service: Set2Decoder::new(), set2_config());
    uart.push(&[0x1c, 0xf0, 0x1c, 0x15]);
    assert_eq!(service.on_interrupt(), IrqStatus::Handled);
    assert_eq!(&*sink.keys.borrow(), &[(30, true), (30, false), (16, true)]);
    assert_eq!(uart.reads(), 4);
}

#[test]
fn overrun_marker_does_not_abort_the_drain() {
    setup!(uart, sink, service: Set2Decoder::new(), set2_config());
    uart.push(&[0xff, 0x1c]);
    assert_eq!(service.on_interrupt(), IrqStatus::Handled);
    assert_eq!(&*sink.keys.borrow(), &[(30, true)]);
}

#[test]
fn unmapped_identifier_reaches_no_sink() {
    setup!(uart, sink, service: Set2Decoder::new(), set2_config());
    uart.push(&[0x02]); // no entry in the default table
    assert_eq!(service.on_interrupt(), IrqStatus::Handled);
    assert!(sink.keys.borrow().is_empty());
    assert_eq!(sink.syncs.get(), 0);
}

#[test]
fn direct_variant_end_to_end() {
    let mut entries = [0u8; 256];
    entries[5] = 2;
    let config = DriverConfig::new(Keymap::new(entries), 542).unwrap();
    setup!(uart, sink, service: DirectDecoder::new(), config);

    uart.push(&[0x05, 0x85]);
    assert_eq!(service.on_interrupt(), IrqStatus::Handled);
    assert_eq!(&*sink.keys.borrow(), &[(2, true), (2, false)]);
}

#[test]
fn failed_enable_leaves_the_port_disabled() {
    let uart = TestUart::default();
    uart.fail_enable();
    let sink = TestSink::default();

    let result = KeyboardService::start(uart.clone(), Set2Decoder::new(), &sink, set2_config());
    assert!(matches!(result, Err(SetupError::Uart(_))));
    assert!(!uart.is_enabled());
}

#[test]
fn drop_disables_the_port() {
    let uart = TestUart::default();
    {
        let sink = TestSink::default();
        let service =
            KeyboardService::start(uart.clone(), Set2Decoder::new(), &sink, set2_config())
                .unwrap();
        assert!(uart.is_enabled());
        service.stop();
    }
    assert!(!uart.is_enabled());
}

#[test]
fn wedged_receiver_is_bounded_by_the_drain_budget() {
    setup!(uart, _sink, service: Set2Decoder::new(), set2_config());
    uart.wedge();
    assert_eq!(service.on_interrupt(), IrqStatus::Handled);
    assert_eq!(uart.reads(), MAX_DRAIN);
}
