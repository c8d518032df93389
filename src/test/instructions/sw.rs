use super::*;

#[test]
fn stores_rd_plus_rm() {
    let machine = run_machine!(
        [instr!(SW, T0, IMM1, ZERO, A0, 9, 0), halt!()],
        [T0 = 5, A0 = 2]
    );

    assert_eq!(machine.dmem().get(9), Some(7));
}

#[test]
fn out_of_range_address_is_ignored() {
    let machine = run_machine!(
        [instr!(SW, T0, S0, ZERO, ZERO, 0, 0), halt!()],
        [T0 = 5, S0 = 5000u32]
    );

    assert!(machine.dmem().words().iter().all(|&word| word == 0));
}
