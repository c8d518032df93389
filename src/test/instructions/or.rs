use super::*;

#[test]
fn three_way_or() {
    let machine = run_machine!(
        [instr!(OR, V0, A0, A1, A2, 0, 0), halt!()],
        [A0 = 0x1, A1 = 0x20, A2 = 0x300u32]
    );

    assert_eq!(machine.register(RegisterId::V0), 0x321);
}
