use super::*;

#[test]
fn loads_and_adds_rm() {
    let mut dmem = vec![0 as Word; 16];
    dmem[5] = 100;

    let imem = vec![instr!(LW, T0, IMM1, ZERO, A0, 5, 0), halt!()];
    let mut machine = Machine::new(&imem, &dmem, &[], Vec::new());
    *machine.register_mut(RegisterId::A0) = 3;
    machine.run(&mut NullTracer).unwrap();

    assert_eq!(machine.register(RegisterId::T0), 103);
}

#[test]
fn address_is_rs_plus_rt() {
    let mut dmem = vec![0 as Word; 16];
    dmem[9] = 0xDEAD;

    let imem = vec![instr!(LW, T0, A0, A1, ZERO, 0, 0), halt!()];
    let mut machine = Machine::new(&imem, &dmem, &[], Vec::new());
    *machine.register_mut(RegisterId::A0) = 4;
    *machine.register_mut(RegisterId::A1) = 5;
    machine.run(&mut NullTracer).unwrap();

    assert_eq!(machine.register(RegisterId::T0), 0xDEAD);
}

#[test]
fn out_of_range_address_leaves_rd_unchanged() {
    let machine = run_machine!(
        [instr!(LW, T0, S0, ZERO, ZERO, 0, 0), halt!()],
        [T0 = 77, S0 = 5000u32]
    );

    assert_eq!(machine.register(RegisterId::T0), 77);
}
