use crate::diff::{ClassifiedToken, DiffResult};
use serde::de::Error as _;

pub fn serialize_diff_result(result: &DiffResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

/// Parses a result written by [`serialize_diff_result`].
///
/// Rejects tokens whose flags contradict their side: `left` may only hold
/// unchanged or removed tokens, `right` only unchanged or added ones.
pub fn deserialize_diff_result(json: &str) -> serde_json::Result<DiffResult> {
    let result: DiffResult = serde_json::from_str(json)?;
    check_side("left", &result.left, |t| t.added)?;
    check_side("right", &result.right, |t| t.removed)?;
    Ok(result)
}

fn check_side(
    side: &str,
    tokens: &[ClassifiedToken],
    misplaced: impl Fn(&ClassifiedToken) -> bool,
) -> serde_json::Result<()> {
    match tokens.iter().position(misplaced) {
        Some(index) => Err(serde_json::Error::custom(format!(
            "{side}[{index}] ({:?}) is {} on the {side} side",
            tokens[index].text,
            if side == "left" { "added" } else { "removed" },
        ))),
        None => Ok(()),
    }
}
