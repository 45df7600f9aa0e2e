//! The single entry point composing every layer.

use sizhu_base::{
    analyze_elements_default, annual_pillars, branch_relations, detect_shensha, four_pillars,
    hidden_stems, luck_direction, luck_pillars, nayin, palaces, start_age, stem_relations,
    ten_god, PillarPosition, ALL_POSITIONS, DEFAULT_LUCK_PERIODS,
};
use sizhu_calendar::{lunar_to_solar, solar_to_lunar, LunarDate};
use sizhu_ephem::prior_and_next_jie;
use sizhu_time::{already_reduced, apply_dst_correction, reduce, CivilTime};

use crate::error::ChartError;
use crate::input::{ChartInput, DateType, TimeType};
use crate::result::{ChartResult, LuckInfo, PillarOrnaments};

/// Number of annual-sequence entries emitted.
const ANNUAL_ENTRIES: usize = 10;

/// Resolve the input's calendar fields to a +08 civil instant.
fn resolve_civil(input: &ChartInput) -> Result<CivilTime, ChartError> {
    let (year, month, day) = match input.date_type {
        DateType::Solar => (input.year, input.month, input.day),
        DateType::Lunar => lunar_to_solar(&LunarDate::new(
            input.year,
            input.month,
            input.day,
            input.is_leap_month,
        ))?,
    };
    Ok(CivilTime::new(
        year,
        month,
        day,
        input.hour,
        input.minute,
        0.0,
    ))
}

/// Compute the full chart for one input record.
///
/// Pure: same input, same result; no I/O, no shared state.
pub fn compute(input: &ChartInput) -> Result<ChartResult, ChartError> {
    input.validate()?;

    // Calendar resolution, then the opt-in DST hour comes back off the clock.
    let civil = apply_dst_correction(resolve_civil(input)?, input.dst_confirmed);

    // A lunar 12th month can resolve past the solar range's end.
    if !(crate::input::YEAR_MIN..=crate::input::YEAR_MAX).contains(&civil.year) {
        return Err(ChartError::OutOfRange(format!(
            "resolved civil year {} outside supported range",
            civil.year
        )));
    }

    let reduction = match input.time_type {
        TimeType::Standard => reduce(civil, input.longitude),
        TimeType::TrueSolar => already_reduced(civil),
    };

    let pillars = four_pillars(&civil, &reduction.reduced, input.early_rat_split)?;
    let lunar = solar_to_lunar(civil.year, civil.month, civil.day)?;
    let (governing_jie, next_jie) = prior_and_next_jie(&civil)?;

    let day_master = pillars.day_master();
    let ornaments: Vec<PillarOrnaments> = ALL_POSITIONS
        .iter()
        .map(|&position| {
            let pillar = pillars.get(position);
            let hidden = hidden_stems(pillar.branch).to_vec();
            PillarOrnaments {
                position,
                pillar,
                nayin: nayin(&pillar),
                stem_god: (position != PillarPosition::Day)
                    .then(|| ten_god(day_master, pillar.stem)),
                hidden_gods: hidden.iter().map(|h| ten_god(day_master, h.stem)).collect(),
                hidden,
            }
        })
        .collect();

    let direction = luck_direction(pillars.year.stem, input.gender);
    let age = start_age(&civil, direction)?;
    let luck = LuckInfo {
        direction,
        start_age: age,
        periods: luck_pillars(pillars.month, direction, age.years, DEFAULT_LUCK_PERIODS),
        annual: annual_pillars(civil.year, ANNUAL_ENTRIES),
    };

    Ok(ChartResult {
        civil,
        lunar,
        reduction,
        governing_jie,
        next_jie,
        shensha: detect_shensha(&pillars),
        branch_relations: branch_relations(&pillars),
        stem_relations: stem_relations(&pillars),
        luck,
        palaces: palaces(pillars.year.stem, pillars.month, pillars.hour.branch),
        elements: analyze_elements_default(&pillars),
        ornaments,
        pillars,
    })
}
