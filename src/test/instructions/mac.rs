use super::*;

#[test]
fn multiply_accumulate() {
    let machine = run_machine!(
        [instr!(MAC, V0, A0, A1, A2, 0, 0), halt!()],
        [A0 = 6, A1 = 7, A2 = 4]
    );

    assert_eq!(machine.register(RegisterId::V0), 46);
}

#[test]
fn product_wraps_to_32_bits() {
    let machine = run_machine!(
        [instr!(MAC, V0, A0, A1, A2, 0, 0), halt!()],
        [A0 = 0x10000u32, A1 = 0x10000u32, A2 = 9]
    );

    assert_eq!(machine.register(RegisterId::V0), 9);
}
