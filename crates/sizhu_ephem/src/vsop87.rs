//! Reduced VSOP87 series for Earth's heliocentric position.
//!
//! Truncated periodic series (the published abridged set): L0..L5 for
//! longitude, B0..B1 for latitude, R0..R2 for the radius vector. Each term
//! is `(A, B, C)` evaluated as `A·cos(B + C·τ)` with τ = Julian millennia
//! from J2000.0; amplitudes are in 10⁻⁸ rad (10⁻⁸ AU for R).
//!
//! The sums run in declared-table order. Do not reorder: bit-identical
//! results across runs are part of the engine contract.

use sizhu_time::julian::jd_to_centuries;

#[rustfmt::skip]
static L0: [(f64, f64, f64); 64] = [
    (175347046.0, 0.0,       0.0),
    (3341656.0,   4.6692568, 6283.0758500),
    (34894.0,     4.62610,   12566.15170),
    (3497.0,      2.7441,    5753.3849),
    (3418.0,      2.8289,    3.5231),
    (3136.0,      3.6277,    77713.7715),
    (2676.0,      4.4181,    7860.4194),
    (2343.0,      6.1352,    3930.2097),
    (1324.0,      0.7425,    11506.7698),
    (1273.0,      2.0371,    529.6910),
    (1199.0,      1.1096,    1577.3435),
    (990.0,       5.233,     5884.927),
    (902.0,       2.045,     26.298),
    (857.0,       3.508,     398.149),
    (780.0,       1.179,     5223.694),
    (753.0,       2.533,     5507.553),
    (505.0,       4.583,     18849.228),
    (492.0,       4.205,     775.523),
    (357.0,       2.920,     0.067),
    (317.0,       5.849,     11790.629),
    (284.0,       1.899,     796.298),
    (271.0,       0.315,     10977.079),
    (243.0,       0.345,     5486.778),
    (206.0,       4.806,     2544.314),
    (205.0,       1.869,     5573.143),
    (202.0,       2.458,     6069.777),
    (156.0,       0.833,     213.299),
    (132.0,       3.411,     2942.463),
    (126.0,       1.083,     20.775),
    (115.0,       0.645,     0.980),
    (103.0,       0.636,     4694.003),
    (102.0,       0.976,     15720.839),
    (102.0,       4.267,     7.114),
    (99.0,        6.21,      2146.17),
    (98.0,        0.68,      155.42),
    (86.0,        5.98,      161000.69),
    (85.0,        1.30,      6275.96),
    (85.0,        3.67,      71430.70),
    (80.0,        1.81,      17260.15),
    (79.0,        3.04,      12036.46),
    (75.0,        1.76,      5088.63),
    (74.0,        3.50,      3154.69),
    (74.0,        4.68,      801.82),
    (70.0,        0.83,      9437.76),
    (62.0,        3.98,      8827.39),
    (61.0,        1.82,      7084.90),
    (57.0,        2.78,      6286.60),
    (56.0,        4.39,      14143.50),
    (56.0,        3.47,      6279.55),
    (52.0,        0.19,      12139.55),
    (52.0,        1.33,      1748.02),
    (51.0,        0.28,      5856.48),
    (49.0,        0.49,      1194.45),
    (41.0,        5.37,      8429.24),
    (41.0,        2.40,      19651.05),
    (39.0,        6.17,      10447.39),
    (37.0,        6.04,      10213.29),
    (37.0,        2.57,      1059.38),
    (36.0,        1.71,      2352.87),
    (36.0,        1.78,      6812.77),
    (33.0,        0.59,      17789.85),
    (30.0,        0.44,      83996.85),
    (30.0,        2.74,      1349.87),
    (25.0,        3.16,      4690.48),
];

#[rustfmt::skip]
static L1: [(f64, f64, f64); 34] = [
    (628331966747.0, 0.0,      0.0),
    (206059.0,       2.678235, 6283.075850),
    (4303.0,         2.6351,   12566.1517),
    (425.0,          1.590,    3.523),
    (119.0,          5.796,    26.298),
    (109.0,          2.966,    1577.344),
    (93.0,           2.59,     18849.23),
    (72.0,           1.14,     529.69),
    (68.0,           1.87,     398.15),
    (67.0,           4.41,     5507.55),
    (59.0,           2.89,     5223.69),
    (56.0,           2.17,     155.42),
    (45.0,           0.40,     796.30),
    (36.0,           0.47,     775.52),
    (29.0,           2.65,     7.11),
    (21.0,           5.34,     0.98),
    (19.0,           1.85,     5486.78),
    (19.0,           4.97,     213.30),
    (17.0,           2.99,     6275.96),
    (16.0,           0.03,     2544.31),
    (16.0,           1.43,     2146.17),
    (15.0,           1.21,     10977.08),
    (12.0,           2.83,     1748.02),
    (12.0,           3.26,     5088.63),
    (12.0,           5.27,     1194.45),
    (12.0,           2.08,     4694.00),
    (11.0,           0.77,     553.57),
    (10.0,           1.30,     6286.60),
    (10.0,           4.24,     1349.87),
    (9.0,            2.70,     242.73),
    (9.0,            5.64,     951.72),
    (8.0,            5.30,     2352.87),
    (6.0,            2.65,     9437.76),
    (6.0,            4.67,     4690.48),
];

#[rustfmt::skip]
static L2: [(f64, f64, f64); 20] = [
    (52919.0, 0.0,    0.0),
    (8720.0,  1.0721, 6283.0758),
    (309.0,   0.867,  12566.152),
    (27.0,    0.05,   3.52),
    (16.0,    5.19,   26.30),
    (16.0,    3.68,   155.42),
    (10.0,    0.76,   18849.23),
    (9.0,     2.06,   77713.77),
    (7.0,     0.83,   775.52),
    (5.0,     4.66,   1577.34),
    (4.0,     1.03,   7.11),
    (4.0,     3.44,   5573.14),
    (3.0,     5.14,   796.30),
    (3.0,     6.05,   5507.55),
    (3.0,     1.19,   242.73),
    (3.0,     6.12,   529.69),
    (3.0,     0.31,   398.15),
    (3.0,     2.28,   553.57),
    (2.0,     4.38,   5223.69),
    (2.0,     3.75,   0.98),
];

#[rustfmt::skip]
static L3: [(f64, f64, f64); 7] = [
    (289.0, 5.844, 6283.076),
    (35.0,  0.0,   0.0),
    (17.0,  5.49,  12566.15),
    (3.0,   5.20,  155.42),
    (1.0,   4.72,  3.52),
    (1.0,   5.30,  18849.23),
    (1.0,   5.97,  242.73),
];

#[rustfmt::skip]
static L4: [(f64, f64, f64); 3] = [
    (114.0, 3.142, 0.0),
    (8.0,   4.13,  6283.08),
    (1.0,   3.84,  12566.15),
];

static L5: [(f64, f64, f64); 1] = [(1.0, 3.14, 0.0)];

#[rustfmt::skip]
static B0: [(f64, f64, f64); 5] = [
    (280.0, 3.199, 84334.662),
    (102.0, 5.422, 5507.553),
    (80.0,  3.88,  5223.69),
    (44.0,  3.70,  2352.87),
    (32.0,  4.00,  1577.34),
];

#[rustfmt::skip]
static B1: [(f64, f64, f64); 2] = [
    (9.0, 3.90, 5507.55),
    (6.0, 1.73, 5223.69),
];

#[rustfmt::skip]
static R0: [(f64, f64, f64); 40] = [
    (100013989.0, 0.0,       0.0),
    (1670700.0,   3.0984635, 6283.0758500),
    (13956.0,     3.05525,   12566.15170),
    (3084.0,      5.1985,    77713.7715),
    (1628.0,      1.1739,    5753.3849),
    (1576.0,      2.8469,    7860.4194),
    (925.0,       5.453,     11506.770),
    (542.0,       4.564,     3930.210),
    (472.0,       3.661,     5884.927),
    (346.0,       0.964,     5507.553),
    (329.0,       5.900,     5223.694),
    (307.0,       0.299,     5573.143),
    (243.0,       4.273,     11790.629),
    (212.0,       5.847,     1577.344),
    (186.0,       5.022,     10977.079),
    (175.0,       3.012,     18849.228),
    (110.0,       5.055,     5486.778),
    (98.0,        0.89,      6069.78),
    (86.0,        5.69,      15720.84),
    (86.0,        1.27,      161000.69),
    (65.0,        0.27,      17260.15),
    (63.0,        0.92,      529.69),
    (57.0,        2.01,      83996.85),
    (56.0,        5.24,      71430.70),
    (49.0,        3.25,      2544.31),
    (47.0,        2.58,      775.52),
    (45.0,        5.54,      9437.76),
    (43.0,        6.01,      6275.96),
    (39.0,        5.36,      4694.00),
    (38.0,        2.39,      8827.39),
    (37.0,        0.83,      19651.05),
    (37.0,        4.90,      12139.55),
    (36.0,        1.67,      12036.46),
    (35.0,        1.84,      2942.46),
    (33.0,        0.24,      7084.90),
    (32.0,        0.18,      5088.63),
    (32.0,        1.78,      398.15),
    (28.0,        1.21,      6286.60),
    (28.0,        1.90,      6279.55),
    (26.0,        4.59,      10447.39),
];

#[rustfmt::skip]
static R1: [(f64, f64, f64); 10] = [
    (103019.0, 1.107490, 6283.075850),
    (1721.0,   1.0644,   12566.1517),
    (702.0,    3.142,    0.0),
    (32.0,     1.02,     18849.23),
    (31.0,     2.84,     5507.55),
    (25.0,     1.32,     5223.69),
    (18.0,     1.42,     1577.34),
    (10.0,     5.91,     10977.08),
    (9.0,      1.42,     6275.96),
    (9.0,      0.27,     5486.78),
];

#[rustfmt::skip]
static R2: [(f64, f64, f64); 6] = [
    (4359.0, 5.7846, 6283.0758),
    (124.0,  5.579,  12566.152),
    (12.0,   3.14,   0.0),
    (9.0,    3.63,   77713.77),
    (6.0,    1.87,   5573.14),
    (3.0,    5.47,   18849.23),
];

fn series_sum(series: &[(f64, f64, f64)], tau: f64) -> f64 {
    let mut sum = 0.0;
    for &(a, b, c) in series {
        sum += a * (b + c * tau).cos();
    }
    sum
}

/// Earth's heliocentric ecliptic position at a dynamical-time JD.
///
/// Returns `(longitude_rad, latitude_rad, radius_au)`.
pub fn earth_heliocentric(jde: f64) -> (f64, f64, f64) {
    let tau = jd_to_centuries(jde) / 10.0;

    let l = (series_sum(&L0, tau)
        + series_sum(&L1, tau) * tau
        + series_sum(&L2, tau) * tau.powi(2)
        + series_sum(&L3, tau) * tau.powi(3)
        + series_sum(&L4, tau) * tau.powi(4)
        + series_sum(&L5, tau) * tau.powi(5))
        * 1e-8;
    let b = (series_sum(&B0, tau) + series_sum(&B1, tau) * tau) * 1e-8;
    let r = (series_sum(&R0, tau)
        + series_sum(&R1, tau) * tau
        + series_sum(&R2, tau) * tau.powi(2))
        * 1e-8;

    (l, b, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_counts_match_published_truncation() {
        assert_eq!(L0.len() + L1.len() + L2.len() + L3.len() + L4.len() + L5.len(), 129);
        assert_eq!(B0.len() + B1.len(), 7);
        assert_eq!(R0.len() + R1.len() + R2.len(), 56);
    }

    #[test]
    fn radius_near_perihelion_and_aphelion() {
        // Early January: ~0.9833 AU. Early July: ~1.0167 AU.
        let (_, _, r_jan) = earth_heliocentric(2_451_545.0);
        assert!((r_jan - 0.98333).abs() < 3e-4, "got {r_jan}");
        let (_, _, r_jul) = earth_heliocentric(2_451_545.0 + 183.0);
        assert!((r_jul - 1.01670).abs() < 3e-4, "got {r_jul}");
    }

    #[test]
    fn latitude_stays_sub_arcsecond() {
        for k in 0..40 {
            let (_, b, _) = earth_heliocentric(2_430_000.5 + k as f64 * 1000.0);
            assert!(b.abs() < 5e-6, "heliocentric latitude should be tiny: {b}");
        }
    }

    #[test]
    fn longitude_advances_one_revolution_per_year() {
        let (l0, _, _) = earth_heliocentric(2_451_545.0);
        let (l1, _, _) = earth_heliocentric(2_451_545.0 + 365.25);
        let dl = (l1 - l0).rem_euclid(std::f64::consts::TAU);
        assert!(dl < 0.01 || dl > std::f64::consts::TAU - 0.01);
    }
}
