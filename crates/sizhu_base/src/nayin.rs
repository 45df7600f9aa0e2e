//! Nayin (納音): the sound/element label of each sexagenary pillar.
//!
//! Thirty entries, each covering two adjacent pillars of the cycle.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Element, Pillar};

/// A nayin label: traditional name plus its element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nayin {
    pub name: String,
    pub element: Element,
}

/// Nayin per pillar pair, indexed by `cycle_index / 2`.
#[rustfmt::skip]
static NAYIN_TABLE: [(&str, Element); 30] = [
    ("海中金", Element::Metal), // 甲子 乙丑
    ("炉中火", Element::Fire),  // 丙寅 丁卯
    ("大林木", Element::Wood),  // 戊辰 己巳
    ("路旁土", Element::Earth), // 庚午 辛未
    ("剑锋金", Element::Metal), // 壬申 癸酉
    ("山头火", Element::Fire),  // 甲戌 乙亥
    ("涧下水", Element::Water), // 丙子 丁丑
    ("城头土", Element::Earth), // 戊寅 己卯
    ("白蜡金", Element::Metal), // 庚辰 辛巳
    ("杨柳木", Element::Wood),  // 壬午 癸未
    ("泉中水", Element::Water), // 甲申 乙酉
    ("屋上土", Element::Earth), // 丙戌 丁亥
    ("霹雳火", Element::Fire),  // 戊子 己丑
    ("松柏木", Element::Wood),  // 庚寅 辛卯
    ("长流水", Element::Water), // 壬辰 癸巳
    ("沙中金", Element::Metal), // 甲午 乙未
    ("山下火", Element::Fire),  // 丙申 丁酉
    ("平地木", Element::Wood),  // 戊戌 己亥
    ("壁上土", Element::Earth), // 庚子 辛丑
    ("金箔金", Element::Metal), // 壬寅 癸卯
    ("覆灯火", Element::Fire),  // 甲辰 乙巳
    ("天河水", Element::Water), // 丙午 丁未
    ("大驿土", Element::Earth), // 戊申 己酉
    ("钗钏金", Element::Metal), // 庚戌 辛亥
    ("桑柘木", Element::Wood),  // 壬子 癸丑
    ("大溪水", Element::Water), // 甲寅 乙卯
    ("沙中土", Element::Earth), // 丙辰 丁巳
    ("天上火", Element::Fire),  // 戊午 己未
    ("石榴木", Element::Wood),  // 庚申 辛酉
    ("大海水", Element::Water), // 壬戌 癸亥
];

/// Nayin of a pillar.
pub fn nayin(pillar: &Pillar) -> Nayin {
    let (name, element) = NAYIN_TABLE[(pillar.cycle_index() / 2) as usize];
    Nayin {
        name: name.to_string(),
        element,
    }
}
