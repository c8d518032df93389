use super::*;

#[test]
fn stops_without_advancing_pc() {
    let machine = run_machine!([halt!(), halt!()]);

    assert!(machine.halted());
    assert_eq!(machine.pc(), 0);
    assert_eq!(machine.cycles(), 1);
}
