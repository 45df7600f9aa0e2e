//! Apparent geocentric solar longitude.
//!
//! Heliocentric VSOP87 position → geocentric longitude (+180°), FK5 frame
//! correction, nutation in longitude, annual aberration. The result is what
//! the solar-term definitions are written against.

use sizhu_time::julian::jd_to_centuries;

use crate::nutation::nutation_longitude_deg;
use crate::vsop87::earth_heliocentric;

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 {
        r + 360.0
    } else {
        r
    }
}

/// Apparent solar longitude in degrees at a dynamical-time JD.
pub fn apparent_solar_longitude_deg(jde: f64) -> f64 {
    let (l, b, r) = earth_heliocentric(jde);
    let t = jd_to_centuries(jde);

    // Geocentric: the Sun sits opposite the Earth.
    let mut lon = l.to_degrees() + 180.0;
    let lat = -b.to_degrees();

    // FK5 frame correction.
    let lp = (lon - 1.397 * t - 0.00031 * t * t).to_radians();
    lon += -0.09033 / 3600.0
        + 0.03916 / 3600.0 * (lp.cos() + lp.sin()) * lat.to_radians().tan();

    // Nutation in longitude.
    lon += nutation_longitude_deg(jde);

    // Annual aberration.
    lon += -20.4898 / 3600.0 / r;

    normalize_360(lon)
}
