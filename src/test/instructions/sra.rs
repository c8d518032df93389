use super::*;

#[test]
fn inserts_sign_bit() {
    let machine = run_machine!(
        [instr!(SRA, V0, A0, A1, ZERO, 0, 0), halt!()],
        [A0 = 0x8000_0000u32, A1 = 4]
    );

    assert_eq!(machine.register(RegisterId::V0), 0xF800_0000);
}

#[test]
fn positive_value_behaves_like_srl() {
    let machine = run_machine!(
        [instr!(SRA, V0, A0, A1, ZERO, 0, 0), halt!()],
        [A0 = 0x40u32, A1 = 2]
    );

    assert_eq!(machine.register(RegisterId::V0), 0x10);
}

#[test]
fn amount_uses_low_five_bits() {
    let machine = run_machine!(
        [instr!(SRA, V0, A0, A1, ZERO, 0, 0), halt!()],
        [A0 = 0xFFFF_0000u32, A1 = 32]
    );

    assert_eq!(machine.register(RegisterId::V0), 0xFFFF_0000);
}
