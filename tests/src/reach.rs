#![cfg(test)]
use dirule_common::DiError;
use dirule_core::domain::arm::Arm;

#[test]
fn reach_then_tip_round_trips() -> anyhow::Result<()> {
    let arm = Arm::new(2.0, 1.0)?;
    let reach = arm.reach(1.5, 1.5)?;
    let (x, y) = arm.tip(&reach);
    assert!((x - 1.5).abs() < 1e-9 && (y - 1.5).abs() < 1e-9);
    Ok(())
}

#[test]
fn two_arms_do_not_share_state() -> anyhow::Result<()> {
    let short = Arm::new(1.0, 1.0)?;
    let long = Arm::new(5.0, 5.0)?;
    assert!(long.reach(8.0, 0.0).is_ok());
    assert_eq!(
        short.reach(8.0, 0.0),
        Err(DiError::Unreachable { x: 8.0, y: 0.0 })
    );
    assert!(long.reach(8.0, 0.0).is_ok());
    Ok(())
}
