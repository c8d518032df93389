use super::*;

#[test]
fn writes_port_from_rm() {
    let machine = run_machine!([instr!(OUT, ZERO, ZERO, IMM1, IMM2, 9, 1), halt!()]);

    assert_eq!(machine.io().leds(), 1);
}

#[test]
fn disk_command_sets_busy() {
    let machine = run_machine!([instr!(OUT, ZERO, ZERO, IMM1, IMM2, 14, 1), halt!()]);

    assert_eq!(machine.io().read(IoRegister::DiskStatus, 0), 1);
}

#[test]
fn enable_ports_keep_low_bit_only() {
    let machine = run_machine!([instr!(OUT, ZERO, ZERO, IMM1, IMM2, 0, 3), halt!()]);

    assert_eq!(machine.io().read(IoRegister::Irq0Enable, 0), 1);
}

#[test]
fn out_of_range_port_is_ignored() {
    let machine = run_machine!([instr!(OUT, ZERO, ZERO, IMM1, IMM2, 40, 1), halt!()]);

    assert_eq!(machine.io().leds(), 0);
}
