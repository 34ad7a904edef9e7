//! Static line/station reference table.
//!
//! Distances are cumulative from the line start and kept in whole metres so
//! fare arithmetic stays integral.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    pub name: &'static str,
    pub distance_from_start: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub name: &'static str,
    pub stations: &'static [Station],
}

impl Line {
    /// Exact-name lookup, case sensitive.
    pub fn station(&self, name: &str) -> Option<&'static Station> {
        self.stations.iter().find(|station| station.name == name)
    }
}

pub const LINES: &[Line] = &[
    Line {
        name: "Line 1",
        stations: &[
            Station {
                name: "Versova",
                distance_from_start: 0,
            },
            Station {
                name: "D N Nagar",
                distance_from_start: 1500,
            },
            Station {
                name: "Azad Nagar",
                distance_from_start: 3000,
            },
            Station {
                name: "Andheri",
                distance_from_start: 5000,
            },
            Station {
                name: "Ghatkopar",
                distance_from_start: 11400,
            },
        ],
    },
    Line {
        name: "Line 2A",
        stations: &[
            Station {
                name: "Dahisar East",
                distance_from_start: 0,
            },
            Station {
                name: "Anand Nagar",
                distance_from_start: 2000,
            },
            Station {
                name: "Borivali West",
                distance_from_start: 5000,
            },
        ],
    },
];

pub fn find_line(name: &str) -> Option<&'static Line> {
    LINES.iter().find(|line| line.name == name)
}
