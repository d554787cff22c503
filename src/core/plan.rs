use crate::domain::model::{CardNumber, LaunchPlan, LauncherConfig, SizeCategory, TargetFilename};
use crate::domain::ports::ScriptLocator;
use crate::utils::error::{LauncherError, Result};
use crate::utils::validation::is_decimal_digits;

/// 驗證卡號字串：只允許數字，且數值需在 1..=max 之間
pub fn parse_card(input: &str, max: u32) -> Result<CardNumber> {
    let invalid = || LauncherError::InvalidCard {
        input: input.to_string(),
        max,
    };

    if !is_decimal_digits(input) {
        return Err(invalid());
    }

    // 超出 u32 的長數字一律視為超出範圍
    let value: u32 = input.parse().map_err(|_| invalid())?;
    if value < 1 || value > max {
        return Err(invalid());
    }

    Ok(CardNumber::new_unchecked(value))
}

/// Pure part of planning: validates the card text and derives the filename.
pub fn target_filename(
    config: &LauncherConfig,
    size: SizeCategory,
    card_input: &str,
) -> Result<(CardNumber, TargetFilename)> {
    let card = parse_card(card_input, config.max_card)?;
    Ok((card, TargetFilename::new(size, card)))
}

/// Validates the input and checks the script exists.
pub fn resolve_plan<L: ScriptLocator + ?Sized>(
    config: &LauncherConfig,
    size: SizeCategory,
    card_input: &str,
    locator: &L,
) -> Result<LaunchPlan> {
    let (card, filename) = target_filename(config, size, card_input)?;

    if !locator.exists(&filename) {
        return Err(LauncherError::MissingTarget {
            filename: filename.to_string(),
            dir: locator.root().display().to_string(),
        });
    }

    Ok(LaunchPlan {
        size,
        prefix: size.prefix(),
        card,
        path: locator.path_of(&filename),
        filename,
    })
}
