//! The 24 solar terms and their instants.
//!
//! A term is defined by an apparent solar longitude: index 0 (Minor Cold,
//! 小寒) sits at 285° and each following term is 15° further. Even indices
//! are the sectional "jie" terms that bound the traditional months; odd
//! indices are the median "qi" terms.
//!
//! Instants are solved by Newton iteration on the apparent longitude, then
//! converted JDE → UT (−ΔT) → the +08 civil clock (+8 h).

use serde::{Deserialize, Serialize};
use sizhu_time::julian::{calendar_to_jd, jd_to_calendar};
use sizhu_time::{delta_t_seconds, CivilTime};

use crate::error::EphemError;
use crate::solar::apparent_solar_longitude_deg;

/// First civil year the term solver accepts.
///
/// One year of slack on each side of the engine's 1900..2100 civil range:
/// boundary lookups for January 1900 reach into December 1899.
pub const TERM_YEAR_MIN: i32 = 1899;
/// Last civil year the term solver accepts.
pub const TERM_YEAR_MAX: i32 = 2101;

/// The 24 solar terms, index order starting at Minor Cold (285°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SolarTerm {
    XiaoHan = 0,
    DaHan = 1,
    LiChun = 2,
    YuShui = 3,
    JingZhe = 4,
    ChunFen = 5,
    QingMing = 6,
    GuYu = 7,
    LiXia = 8,
    XiaoMan = 9,
    MangZhong = 10,
    XiaZhi = 11,
    XiaoShu = 12,
    DaShu = 13,
    LiQiu = 14,
    ChuShu = 15,
    BaiLu = 16,
    QiuFen = 17,
    HanLu = 18,
    ShuangJiang = 19,
    LiDong = 20,
    XiaoXue = 21,
    DaXue = 22,
    DongZhi = 23,
}

/// All 24 terms in index order.
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

impl SolarTerm {
    /// 0-based index (XiaoHan = 0 .. DongZhi = 23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Create from a 0..23 index.
    pub fn from_index(v: u8) -> Option<Self> {
        if (v as usize) < ALL_TERMS.len() {
            Some(ALL_TERMS[v as usize])
        } else {
            None
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::XiaoHan => "Xiaohan",
            Self::DaHan => "Dahan",
            Self::LiChun => "Lichun",
            Self::YuShui => "Yushui",
            Self::JingZhe => "Jingzhe",
            Self::ChunFen => "Chunfen",
            Self::QingMing => "Qingming",
            Self::GuYu => "Guyu",
            Self::LiXia => "Lixia",
            Self::XiaoMan => "Xiaoman",
            Self::MangZhong => "Mangzhong",
            Self::XiaZhi => "Xiazhi",
            Self::XiaoShu => "Xiaoshu",
            Self::DaShu => "Dashu",
            Self::LiQiu => "Liqiu",
            Self::ChuShu => "Chushu",
            Self::BaiLu => "Bailu",
            Self::QiuFen => "Qiufen",
            Self::HanLu => "Hanlu",
            Self::ShuangJiang => "Shuangjiang",
            Self::LiDong => "Lidong",
            Self::XiaoXue => "Xiaoxue",
            Self::DaXue => "Daxue",
            Self::DongZhi => "Dongzhi",
        }
    }

    /// Chinese glyphs.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
        }
    }

    /// Target apparent solar longitude in degrees.
    pub fn target_longitude_deg(self) -> f64 {
        (285.0 + 15.0 * self.index() as f64) % 360.0
    }

    /// Whether this is a sectional term (節) bounding a month.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }
}

/// A solar term paired with its +08 civil instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermInstant {
    pub term: SolarTerm,
    pub instant: CivilTime,
}

fn check_year(year: i32) -> Result<(), EphemError> {
    if (TERM_YEAR_MIN..=TERM_YEAR_MAX).contains(&year) {
        Ok(())
    } else {
        Err(EphemError::YearOutOfRange(year))
    }
}

/// Dynamical-time JD of a term in the given civil year.
fn solve_term_jde(year: i32, term: SolarTerm) -> Result<f64, EphemError> {
    let target = term.target_longitude_deg();
    let mut jd =
        calendar_to_jd(year, 1, 1.0) + 4.0 + term.index() as f64 * (365.25 / 24.0);

    for _ in 0..50 {
        let lambda = apparent_solar_longitude_deg(jd);
        let mut diff = (target - lambda).rem_euclid(360.0);
        if diff > 180.0 {
            diff -= 360.0;
        }
        if diff.abs() < 1e-5 {
            return Ok(jd);
        }
        jd += diff / 360.0 * 365.25;
    }
    Err(EphemError::NoConvergence("solar-term longitude iteration"))
}

/// The +08 civil instant at which the Sun reaches `term`'s longitude in the
/// given civil year.
pub fn solar_term_instant(year: i32, term: SolarTerm) -> Result<CivilTime, EphemError> {
    check_year(year)?;
    let jde = solve_term_jde(year, term)?;
    let (y, m, _) = jd_to_calendar(jde);
    let jd_civil = jde - delta_t_seconds(y, m) / 86_400.0 + 8.0 / 24.0;
    Ok(CivilTime::from_jd(jd_civil))
}

/// All 24 term instants of a civil year, in index (and instant) order.
pub fn all_solar_terms(year: i32) -> Result<Vec<TermInstant>, EphemError> {
    check_year(year)?;
    let mut out = Vec::with_capacity(ALL_TERMS.len());
    for term in ALL_TERMS {
        out.push(TermInstant {
            term,
            instant: solar_term_instant(year, term)?,
        });
    }
    Ok(out)
}

/// The sectional terms governing `t`: the latest jie at or before it and the
/// first jie after it.
///
/// Satisfies `prior.instant ≤ t < next.instant`; both terms have even index.
pub fn prior_and_next_jie(t: &CivilTime) -> Result<(TermInstant, TermInstant), EphemError> {
    let mut prior: Option<TermInstant> = None;
    let mut next: Option<TermInstant> = None;

    for year in [t.year - 1, t.year, t.year + 1] {
        if !(TERM_YEAR_MIN..=TERM_YEAR_MAX).contains(&year) {
            continue;
        }
        for term in ALL_TERMS.into_iter().filter(|s| s.is_jie()) {
            let ti = TermInstant {
                term,
                instant: solar_term_instant(year, term)?,
            };
            if ti.instant <= *t {
                if prior.map_or(true, |p| ti.instant > p.instant) {
                    prior = Some(ti);
                }
            } else if next.map_or(true, |n| ti.instant < n.instant) {
                next = Some(ti);
            }
        }
    }

    match (prior, next) {
        (Some(p), Some(n)) => Ok((p, n)),
        _ => Err(EphemError::YearOutOfRange(t.year)),
    }
}
