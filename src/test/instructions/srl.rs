use super::*;

#[test]
fn inserts_zeros() {
    let machine = run_machine!(
        [instr!(SRL, V0, A0, A1, ZERO, 0, 0), halt!()],
        [A0 = 0x8000_0000u32, A1 = 4]
    );

    assert_eq!(machine.register(RegisterId::V0), 0x0800_0000);
}
