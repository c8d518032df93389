use super::*;

#[test]
fn restores_pc_from_irqreturn() {
    let machine = run_machine!([
        instr!(OUT, ZERO, ZERO, IMM1, IMM2, 7, 3),
        instr!(RETI, ZERO, ZERO, ZERO, ZERO, 0, 0),
        halt!(),
        halt!(),
    ]);

    assert_eq!(machine.pc(), 3);
    assert_eq!(machine.cycles(), 3);
    assert!(!machine.in_interrupt());
}
