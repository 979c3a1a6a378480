//! Calendar context for an observation: tropical sun sign, ascendant and
//! lunar phase.
//!
//! All of these are deliberately coarse. Sun signs use fixed civil date ranges
//! rather than the Sun's true ecliptic longitude. The ascendant is read off
//! the civil clock shifted by longitude, not off sidereal time. The lunar
//! phase counts whole days against a constant synodic month from a reference
//! new moon.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::observation::ObservationMoment;

/// Mean synodic month, days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53058867;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SunSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Signs in zodiacal order, starting at the vernal equinox.
const ZODIAC: [SunSign; 12] = [
    SunSign::Aries,
    SunSign::Taurus,
    SunSign::Gemini,
    SunSign::Cancer,
    SunSign::Leo,
    SunSign::Virgo,
    SunSign::Libra,
    SunSign::Scorpio,
    SunSign::Sagittarius,
    SunSign::Capricorn,
    SunSign::Aquarius,
    SunSign::Pisces,
];

/// (sign, first month, first day); each sign runs until the next one starts.
const SIGN_STARTS: [(SunSign, u32, u32); 12] = [
    (SunSign::Capricorn, 1, 1),
    (SunSign::Aquarius, 1, 20),
    (SunSign::Pisces, 2, 19),
    (SunSign::Aries, 3, 21),
    (SunSign::Taurus, 4, 20),
    (SunSign::Gemini, 5, 21),
    (SunSign::Cancer, 6, 21),
    (SunSign::Leo, 7, 23),
    (SunSign::Virgo, 8, 23),
    (SunSign::Libra, 9, 23),
    (SunSign::Scorpio, 10, 23),
    (SunSign::Sagittarius, 11, 22),
];

impl SunSign {
    /// Sun sign for a calendar day. Capricorn spans the year boundary
    /// (22 December to 19 January).
    pub fn from_date(month: u32, day: u32) -> Self {
        if (month, day) >= (12, 22) {
            return SunSign::Capricorn;
        }
        SIGN_STARTS
            .iter()
            .rev()
            .find(|(_, m, d)| (month, day) >= (*m, *d))
            .map(|(sign, _, _)| *sign)
            .unwrap_or(SunSign::Capricorn)
    }

    /// Simplified ascendant: the civil hour (hours and minutes) shifted by
    /// longitude, taken as an angle of 15 degrees per hour and split into
    /// 30 degree signs counted from Aries.
    pub fn ascendant(hour: u32, minute: u32, longitude_deg: f64) -> Self {
        let clock_hours = hour as f64 + minute as f64 / 60.0;
        let local_hours = (clock_hours + longitude_deg / 15.0).rem_euclid(24.0);
        let degrees = (local_hours * 15.0).rem_euclid(360.0);
        let index = ((degrees / 30.0) as usize).min(ZODIAC.len() - 1);
        ZODIAC[index]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SunSign::Aries => "Aries",
            SunSign::Taurus => "Taurus",
            SunSign::Gemini => "Gemini",
            SunSign::Cancer => "Cancer",
            SunSign::Leo => "Leo",
            SunSign::Virgo => "Virgo",
            SunSign::Libra => "Libra",
            SunSign::Scorpio => "Scorpio",
            SunSign::Sagittarius => "Sagittarius",
            SunSign::Capricorn => "Capricorn",
            SunSign::Aquarius => "Aquarius",
            SunSign::Pisces => "Pisces",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            SunSign::Aries => '♈',
            SunSign::Taurus => '♉',
            SunSign::Gemini => '♊',
            SunSign::Cancer => '♋',
            SunSign::Leo => '♌',
            SunSign::Virgo => '♍',
            SunSign::Libra => '♎',
            SunSign::Scorpio => '♏',
            SunSign::Sagittarius => '♐',
            SunSign::Capricorn => '♑',
            SunSign::Aquarius => '♒',
            SunSign::Pisces => '♓',
        }
    }

    pub fn element(&self) -> Element {
        match self {
            SunSign::Aries | SunSign::Leo | SunSign::Sagittarius => Element::Fire,
            SunSign::Taurus | SunSign::Virgo | SunSign::Capricorn => Element::Earth,
            SunSign::Gemini | SunSign::Libra | SunSign::Aquarius => Element::Air,
            SunSign::Cancer | SunSign::Scorpio | SunSign::Pisces => Element::Water,
        }
    }

    pub fn modality(&self) -> Modality {
        match self {
            SunSign::Aries | SunSign::Cancer | SunSign::Libra | SunSign::Capricorn => {
                Modality::Cardinal
            }
            SunSign::Taurus | SunSign::Leo | SunSign::Scorpio | SunSign::Aquarius => {
                Modality::Fixed
            }
            SunSign::Gemini | SunSign::Virgo | SunSign::Sagittarius | SunSign::Pisces => {
                Modality::Mutable
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum LunarPhase {
    New,
    Waxing,
    Full,
    Waning,
}

impl LunarPhase {
    /// Bucket a phase fraction (0 = new moon, 0.5 = full moon).
    pub fn from_fraction(fraction: f64) -> Self {
        match fraction {
            f if f < 0.125 => LunarPhase::New,
            f if f < 0.375 => LunarPhase::Waxing,
            f if f < 0.625 => LunarPhase::Full,
            _ => LunarPhase::Waning,
        }
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::from_fraction(lunar_phase_fraction(instant))
    }
}

/// Reference new moon: 2000-01-06 00:00 UTC.
fn reference_new_moon() -> DateTime<Utc> {
    Utc.timestamp_opt(947_116_800, 0)
        .single()
        .unwrap_or_default()
}

/// Position within the synodic month, in `[0, 1)`.
///
/// Only whole days since the reference new moon count, floored, so every
/// instant of a UTC day shares one phase.
pub fn lunar_phase_fraction(instant: DateTime<Utc>) -> f64 {
    let elapsed = instant.signed_duration_since(reference_new_moon());
    let days = elapsed.num_seconds().div_euclid(86_400) as f64;
    let fraction = days.rem_euclid(SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

/// Most frequent element; on a tie the one listed first wins.
pub fn dominant_element(elements: &[Element]) -> Option<Element> {
    let mut tally: Vec<(Element, usize)> = Vec::with_capacity(elements.len());
    for &element in elements {
        match tally.iter_mut().find(|(e, _)| *e == element) {
            Some((_, count)) => *count += 1,
            None => tally.push((element, 1)),
        }
    }
    tally
        .into_iter()
        .fold(None, |best: Option<(Element, usize)>, (element, count)| match best {
            Some((_, best_count)) if count <= best_count => best,
            _ => Some((element, count)),
        })
        .map(|(element, _)| element)
}

/// Calendar context for one observation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Almanac {
    pub sun_sign: SunSign,
    pub element: Element,
    pub modality: Modality,
    pub ascendant: SunSign,
    /// Tally of the sun sign's and ascendant's elements.
    pub dominant_element: Element,
    pub lunar_phase: LunarPhase,
    pub phase_fraction: f64,
}

impl Almanac {
    pub fn at(moment: &ObservationMoment) -> Self {
        let instant = moment.timestamp();
        let sun_sign = SunSign::from_date(instant.month(), instant.day());
        let ascendant =
            SunSign::ascendant(instant.hour(), instant.minute(), moment.longitude_deg());
        let fraction = lunar_phase_fraction(instant);
        Self {
            sun_sign,
            element: sun_sign.element(),
            modality: sun_sign.modality(),
            ascendant,
            dominant_element: dominant_element(&[sun_sign.element(), ascendant.element()])
                .unwrap_or_else(|| sun_sign.element()),
            lunar_phase: LunarPhase::from_fraction(fraction),
            phase_fraction: fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_boundaries() {
        let cases = [
            ((1, 19), SunSign::Capricorn),
            ((1, 20), SunSign::Aquarius),
            ((2, 18), SunSign::Aquarius),
            ((2, 19), SunSign::Pisces),
            ((3, 20), SunSign::Pisces),
            ((3, 21), SunSign::Aries),
            ((4, 19), SunSign::Aries),
            ((4, 20), SunSign::Taurus),
            ((6, 21), SunSign::Cancer),
            ((7, 22), SunSign::Cancer),
            ((7, 23), SunSign::Leo),
            ((10, 22), SunSign::Libra),
            ((11, 21), SunSign::Scorpio),
            ((11, 22), SunSign::Sagittarius),
            ((12, 21), SunSign::Sagittarius),
            ((12, 22), SunSign::Capricorn),
            ((12, 31), SunSign::Capricorn),
            ((1, 1), SunSign::Capricorn),
        ];
        for ((month, day), expected) in cases {
            assert_eq!(SunSign::from_date(month, day), expected, "{month}/{day}");
        }
    }

    #[test]
    fn elements_and_modalities() {
        assert_eq!(SunSign::Leo.element(), Element::Fire);
        assert_eq!(SunSign::Capricorn.element(), Element::Earth);
        assert_eq!(SunSign::Aquarius.modality(), Modality::Fixed);
        assert_eq!(SunSign::Pisces.modality(), Modality::Mutable);
        assert_eq!(SunSign::Aries.symbol(), '♈');
        assert_eq!(SunSign::Sagittarius.name(), "Sagittarius");
    }

    #[test]
    fn phase_buckets() {
        assert_eq!(LunarPhase::from_fraction(0.0), LunarPhase::New);
        assert_eq!(LunarPhase::from_fraction(0.124), LunarPhase::New);
        assert_eq!(LunarPhase::from_fraction(0.125), LunarPhase::Waxing);
        assert_eq!(LunarPhase::from_fraction(0.5), LunarPhase::Full);
        assert_eq!(LunarPhase::from_fraction(0.625), LunarPhase::Waning);
        assert_eq!(LunarPhase::from_fraction(0.99), LunarPhase::Waning);
    }

    #[test]
    fn phase_from_reference() {
        let new_moon = Utc.with_ymd_and_hms(2000, 1, 6, 0, 0, 0).unwrap();
        assert_eq!(lunar_phase_fraction(new_moon), 0.0);
        assert_eq!(LunarPhase::at(new_moon), LunarPhase::New);

        let full = new_moon + chrono::Duration::hours((SYNODIC_MONTH_DAYS * 12.0) as i64);
        assert_eq!(LunarPhase::at(full), LunarPhase::Full);

        // Late on the reference day is still day 0
        let same_day = Utc.with_ymd_and_hms(2000, 1, 6, 23, 59, 59).unwrap();
        assert_eq!(lunar_phase_fraction(same_day), 0.0);

        // One hour before the reference is day -1, not day 0
        let before = Utc.with_ymd_and_hms(2000, 1, 5, 23, 0, 0).unwrap();
        let expected = (SYNODIC_MONTH_DAYS - 1.0) / SYNODIC_MONTH_DAYS;
        assert!((lunar_phase_fraction(before) - expected).abs() < 1e-12);

        // Before the reference date the phase still lands in [0, 1)
        let earlier = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap();
        let f = lunar_phase_fraction(earlier);
        assert!((0.0..1.0).contains(&f));
    }

    #[test]
    fn phase_is_constant_within_a_day() {
        let morning = Utc.with_ymd_and_hms(2024, 4, 23, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2024, 4, 23, 23, 59, 0).unwrap();
        assert_eq!(lunar_phase_fraction(morning), lunar_phase_fraction(night));
    }

    #[test]
    fn ascendant_crosses_sign_boundaries() {
        // 30 degrees per sign is two hours of clock time
        assert_eq!(SunSign::ascendant(0, 0, 0.0), SunSign::Aries);
        assert_eq!(SunSign::ascendant(1, 59, 0.0), SunSign::Aries);
        assert_eq!(SunSign::ascendant(2, 0, 0.0), SunSign::Taurus);
        assert_eq!(SunSign::ascendant(23, 59, 0.0), SunSign::Pisces);
        // Longitude shifts the clock by an hour per 15 degrees
        assert_eq!(SunSign::ascendant(1, 0, 15.0), SunSign::Taurus);
        assert_eq!(SunSign::ascendant(0, 30, -15.0), SunSign::Pisces);
    }

    #[test]
    fn dominant_element_tie_goes_to_first() {
        assert_eq!(
            dominant_element(&[Element::Water, Element::Fire]),
            Some(Element::Water)
        );
        assert_eq!(
            dominant_element(&[Element::Fire, Element::Water]),
            Some(Element::Fire)
        );
        assert_eq!(
            dominant_element(&[Element::Air, Element::Earth, Element::Earth]),
            Some(Element::Earth)
        );
        assert_eq!(dominant_element(&[]), None);
    }

    #[test]
    fn almanac_combines_all() {
        let moment = ObservationMoment::parse("1990-07-15 14:30", -23.55, -46.63).unwrap();
        let almanac = Almanac::at(&moment);
        assert_eq!(almanac.sun_sign, SunSign::Cancer);
        assert_eq!(almanac.element, Element::Water);
        assert_eq!(almanac.modality, Modality::Cardinal);
        // 14.5 h - 3.109 h = 11.39 h -> 170.9 deg -> sixth sign
        assert_eq!(almanac.ascendant, SunSign::Virgo);
        // Water against Earth: the sun sign's element wins the tie
        assert_eq!(almanac.dominant_element, Element::Water);
        assert_eq!(
            almanac.lunar_phase,
            LunarPhase::from_fraction(almanac.phase_fraction)
        );
    }
}
