//! Built-in table of bright, well-known named stars.
//!
//! Positions are J2000 in degrees. Physical properties are typical literature
//! values and are only carried through to reports.

use crate::{ConstellationStar, StarRecord};

fn cs(name: &str, ra_deg: f64, dec_deg: f64, magnitude: f64) -> ConstellationStar {
    ConstellationStar {
        name: name.to_string(),
        ra_deg,
        dec_deg,
        magnitude,
    }
}

#[allow(clippy::too_many_arguments)]
fn named(
    name: &str,
    hip: u32,
    constellation: &str,
    magnitude: f64,
    distance_ly: f64,
    spectral_class: &str,
    (ra_deg, dec_deg): (f64, f64),
    (age_gyr, mass_solar, temperature_k): (f64, f64, f64),
    history: &str,
    constellation_stars: Vec<ConstellationStar>,
) -> StarRecord {
    StarRecord {
        name: name.to_string(),
        ra_deg,
        dec_deg,
        magnitude,
        distance_ly,
        spectral_class: spectral_class.to_string(),
        constellation: constellation.to_string(),
        hip: Some(hip),
        age_gyr: Some(age_gyr),
        mass_solar: Some(mass_solar),
        temperature_k: Some(temperature_k),
        history: history.to_string(),
        constellation_stars,
    }
}

/// Sirius, used as the fallback star when no match can be made.
pub fn sirius() -> StarRecord {
    named(
        "Sirius",
        32349,
        "Canis Major",
        -1.46,
        8.6,
        "A1V",
        (101.287, -16.716),
        (0.242, 2.02, 9940.0),
        "The brightest star of the night sky. Its heliacal rising announced the \
         yearly Nile flood in ancient Egypt. It is a binary; the white dwarf \
         companion Sirius B was discovered in 1862.",
        vec![
            cs("Sirius", 101.287, -16.716, -1.46),
            cs("Mirzam", 95.674, -17.956, 1.98),
            cs("Wezen", 107.098, -26.393, 1.84),
            cs("Adhara", 104.656, -28.972, 1.50),
            cs("Aludra", 111.023, -29.303, 2.45),
        ],
    )
}

/// The full built-in table, brightest first.
pub fn named_stars() -> Vec<StarRecord> {
    vec![
        sirius(),
        named(
            "Vega",
            91262,
            "Lyra",
            0.03,
            25.04,
            "A0V",
            (279.234, 38.784),
            (0.455, 2.135, 9602.0),
            "Pole star some 12,000 years ago and again around 13,700 AD through \
             precession. First star other than the Sun to be photographed (1850) \
             and long the zero point of the magnitude scale.",
            vec![
                cs("Vega", 279.234, 38.784, 0.03),
                cs("Sheliak", 282.520, 33.363, 3.25),
                cs("Sulafat", 284.736, 32.690, 3.24),
                cs("Delta Lyr", 283.626, 36.899, 4.30),
            ],
        ),
        named(
            "Arcturus",
            69673,
            "Boötes",
            -0.05,
            36.7,
            "K1.5III",
            (213.915, 19.182),
            (7.1, 1.08, 4286.0),
            "An old halo star with a large proper motion, drifting one lunar \
             diameter every 800 years. Its light opened the 1933 Chicago World's Fair.",
            vec![
                cs("Arcturus", 213.915, 19.182, -0.05),
                cs("Izar", 221.247, 27.074, 2.37),
                cs("Muphrid", 208.671, 18.398, 2.68),
                cs("Seginus", 218.019, 38.308, 3.03),
            ],
        ),
        named(
            "Capella",
            24608,
            "Auriga",
            0.08,
            42.9,
            "G3III",
            (79.172, 45.998),
            (0.590, 2.69, 4970.0),
            "A system of two yellow giants orbiting each other every 104 days, \
             with fainter companions. In myth it is Amalthea, the goat that nursed Zeus.",
            vec![
                cs("Capella", 79.172, 45.998, 0.08),
                cs("Menkalinan", 89.882, 44.948, 1.90),
                cs("Mahasim", 74.248, 33.166, 2.69),
                cs("Haedus", 76.629, 41.076, 3.75),
            ],
        ),
        named(
            "Rigel",
            24436,
            "Orion",
            0.13,
            860.0,
            "B8Ia",
            (78.634, -8.202),
            (0.008, 21.0, 11000.0),
            "A blue supergiant tens of thousands of times more luminous than the \
             Sun. The name comes from the Arabic for 'the left foot of Orion'.",
            vec![
                cs("Rigel", 78.634, -8.202, 0.13),
                cs("Betelgeuse", 88.793, 7.407, 0.50),
                cs("Bellatrix", 81.283, 6.350, 1.64),
                cs("Alnilam", 84.053, -1.202, 1.70),
                cs("Alnitak", 85.190, -1.943, 1.77),
            ],
        ),
        named(
            "Procyon",
            37279,
            "Canis Minor",
            0.37,
            11.5,
            "F5IV",
            (114.826, 5.225),
            (1.87, 1.50, 6530.0),
            "'Before the dog': it rises shortly before Sirius. Like Sirius it has \
             a white dwarf companion, and it forms the Winter Triangle with \
             Sirius and Betelgeuse.",
            vec![
                cs("Procyon", 114.826, 5.225, 0.37),
                cs("Gomeisa", 111.788, 8.289, 2.90),
            ],
        ),
        named(
            "Betelgeuse",
            27989,
            "Orion",
            0.50,
            548.0,
            "M1Ia",
            (88.793, 7.407),
            (0.010, 18.0, 3500.0),
            "A red supergiant near the end of its life; placed at the Sun it would \
             swallow the orbits out to Jupiter. Expected to end as a supernova.",
            vec![
                cs("Betelgeuse", 88.793, 7.407, 0.50),
                cs("Rigel", 78.634, -8.202, 0.13),
                cs("Bellatrix", 81.283, 6.350, 1.64),
                cs("Alnilam", 84.053, -1.202, 1.70),
                cs("Alnitak", 85.190, -1.943, 1.77),
            ],
        ),
        named(
            "Altair",
            97649,
            "Aquila",
            0.77,
            16.7,
            "A7V",
            (297.696, 8.868),
            (1.2, 1.79, 7377.0),
            "Rotates once every nine hours and is visibly flattened at the poles. \
             Part of the Summer Triangle with Vega and Deneb.",
            vec![
                cs("Altair", 297.696, 8.868, 0.77),
                cs("Tarazed", 296.565, 10.613, 2.72),
                cs("Alshain", 298.828, 6.407, 3.71),
            ],
        ),
        named(
            "Aldebaran",
            21421,
            "Taurus",
            0.85,
            66.6,
            "K5III",
            (68.980, 16.509),
            (6.4, 1.16, 3910.0),
            "'The follower' of the Pleiades and the eye of the Bull. One of the \
             four royal stars of ancient Persia.",
            vec![
                cs("Aldebaran", 68.980, 16.509, 0.85),
                cs("Elnath", 81.573, 28.608, 1.68),
                cs("Alcyone", 56.871, 24.105, 2.87),
                cs("Tianguan", 84.411, 21.143, 3.00),
            ],
        ),
        named(
            "Spica",
            65474,
            "Virgo",
            0.97,
            250.0,
            "B1III",
            (201.298, -11.161),
            (0.012, 11.43, 25300.0),
            "A close binary with a four-day orbit. Hipparchus used it to discover \
             the precession of the equinoxes.",
            vec![
                cs("Spica", 201.298, -11.161, 0.97),
                cs("Zavijava", 177.674, 1.765, 3.61),
                cs("Porrima", 190.415, -1.449, 2.74),
                cs("Vindemiatrix", 195.544, 10.959, 2.83),
            ],
        ),
        named(
            "Antares",
            80763,
            "Scorpius",
            1.09,
            604.0,
            "M1.5Iab",
            (247.352, -26.432),
            (0.011, 15.0, 3400.0),
            "'Rival of Mars' for its red colour. A supergiant roughly 700 times the \
             Sun's diameter with a hot companion on a 2,500-year orbit.",
            vec![
                cs("Antares", 247.352, -26.432, 1.09),
                cs("Shaula", 263.402, -37.104, 1.63),
                cs("Sargas", 264.330, -42.998, 1.87),
                cs("Dschubba", 240.083, -22.622, 2.32),
            ],
        ),
        named(
            "Pollux",
            37826,
            "Gemini",
            1.14,
            33.8,
            "K0III",
            (116.329, 28.026),
            (0.724, 1.91, 4666.0),
            "The brightest star in Gemini despite its Beta designation. An orange \
             giant hosting a confirmed planet.",
            vec![
                cs("Pollux", 116.329, 28.026, 1.14),
                cs("Castor", 113.650, 31.888, 1.57),
                cs("Alhena", 99.428, 16.399, 1.90),
                cs("Tejat", 95.740, 22.514, 2.88),
            ],
        ),
        named(
            "Fomalhaut",
            113368,
            "Piscis Austrinus",
            1.16,
            25.1,
            "A3V",
            (344.413, -29.622),
            (0.44, 1.92, 8590.0),
            "'Mouth of the southern fish'. Surrounded by a debris disk in which one \
             of the first directly imaged exoplanet candidates was reported.",
            vec![
                cs("Fomalhaut", 344.413, -29.622, 1.16),
                cs("Epsilon PsA", 336.020, -27.044, 4.17),
                cs("Delta PsA", 343.987, -32.540, 4.20),
            ],
        ),
        named(
            "Deneb",
            102098,
            "Cygnus",
            1.25,
            2616.0,
            "A2Ia",
            (310.358, 45.280),
            (0.010, 19.0, 8525.0),
            "One of the most luminous stars known, marking the tail of the Swan. \
             It will be the pole star around 10,000 AD.",
            vec![
                cs("Deneb", 310.358, 45.280, 1.25),
                cs("Albireo", 292.680, 27.960, 3.18),
                cs("Sadr", 305.557, 40.257, 2.20),
                cs("Gienah", 305.253, 33.970, 2.46),
            ],
        ),
        named(
            "Regulus",
            49669,
            "Leo",
            1.35,
            79.3,
            "B8IVn",
            (152.093, 11.967),
            (0.25, 3.8, 12460.0),
            "'Little king', the heart of the Lion. A fast rotator lying almost \
             exactly on the ecliptic.",
            vec![
                cs("Regulus", 152.093, 11.967, 1.35),
                cs("Denebola", 177.265, 14.572, 2.14),
                cs("Algieba", 154.993, 19.842, 2.28),
                cs("Zosma", 168.527, 20.524, 2.56),
            ],
        ),
    ]
}
