use super::*;

#[test]
fn three_way_and() {
    let machine = run_machine!(
        [instr!(AND, V0, A0, A1, A2, 0, 0), halt!()],
        [A0 = 0xFFF0u32, A1 = 0x0FFFu32, A2 = 0x0FF0u32]
    );

    assert_eq!(machine.register(RegisterId::V0), 0x0FF0);
}
