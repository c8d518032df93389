use super::*;

#[test]
fn links_and_jumps() {
    let mut imem = vec![0u64; 0x51];
    imem[0] = instr!(JAL, RA, ZERO, ZERO, S0, 0, 0);
    imem[0x50] = halt!();

    let mut machine = Machine::new(&imem, &[], &[], Vec::new());
    *machine.register_mut(RegisterId::S0) = 0x50;
    machine.run(&mut NullTracer).unwrap();

    assert_eq!(machine.register(RegisterId::RA), 1);
    assert_eq!(machine.pc(), 0x50);
    assert_eq!(machine.cycles(), 2);
}

#[test]
fn jump_through_link_register_lands_on_next_instruction() {
    let machine = run_machine!([instr!(JAL, RA, ZERO, ZERO, RA, 0, 0), halt!()]);

    assert_eq!(machine.register(RegisterId::RA), 1);
    assert_eq!(machine.pc(), 1);
}

#[test]
fn link_register_can_be_any_slot() {
    let machine = run_machine!(
        [instr!(JAL, T2, ZERO, ZERO, S0, 0, 0), halt!(), halt!()],
        [S0 = 2]
    );

    assert_eq!(machine.register(RegisterId::T2), 1);
    assert_eq!(machine.pc(), 2);
}
