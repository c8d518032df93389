use super::*;

#[test]
fn three_way_xor() {
    let machine = run_machine!(
        [instr!(XOR, V0, A0, A1, A2, 0, 0), halt!()],
        [A0 = 0xFFFFu32, A1 = 0x00FFu32, A2 = 0x000Fu32]
    );

    assert_eq!(machine.register(RegisterId::V0), 0xFF0F);
}
