use crate::model::CalendarDate;
use crate::picker::{month_label, WEEKDAY_HEADERS};
use crate::schedule::{CalendarError, DayCategory, ShiftCalendar, COLUMNS};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Entrées de la palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Morning,
    Afternoon,
    Saturday,
    Off,
    Holiday,
    Empty,
    HeaderWeekday,
    HeaderSaturday,
    HeaderSunday,
}

impl Swatch {
    pub fn rgb(self) -> Rgb {
        match self {
            Swatch::Morning => Rgb(0x24, 0x92, 0x84),
            Swatch::Afternoon => Rgb(0x24, 0x6A, 0x92),
            Swatch::Saturday => Rgb(0x1D, 0x75, 0x6A),
            Swatch::Off => Rgb(0x66, 0x66, 0x66),
            Swatch::Holiday | Swatch::HeaderSunday => Rgb(0x55, 0x33, 0x33),
            Swatch::Empty => Rgb(0, 0, 0),
            Swatch::HeaderWeekday => Rgb(0x55, 0x55, 0x55),
            Swatch::HeaderSaturday => Rgb(0x78, 0x6B, 0x3A),
        }
    }

    /// Repère ASCII utilisé en sortie sans couleur.
    pub fn marker(self) -> char {
        match self {
            Swatch::Morning => '#',
            Swatch::Afternoon => '=',
            Swatch::Saturday => '+',
            Swatch::Off => '-',
            Swatch::Holiday => '*',
            Swatch::Empty
            | Swatch::HeaderWeekday
            | Swatch::HeaderSaturday
            | Swatch::HeaderSunday => ' ',
        }
    }
}

impl From<DayCategory> for Swatch {
    fn from(category: DayCategory) -> Self {
        match category {
            DayCategory::Holiday => Swatch::Holiday,
            DayCategory::SaturdayFirstShift => Swatch::Saturday,
            DayCategory::SaturdaySecondShift | DayCategory::Sunday => Swatch::Off,
            DayCategory::FirstShift => Swatch::Morning,
            DayCategory::SecondShift => Swatch::Afternoon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub swatch: Swatch,
}

/// Légende : Ranek / Święto / Popołudnie, couleurs échangées si inversé.
pub fn legend(is_inverted: bool) -> [LegendEntry; 3] {
    let (morning, afternoon) = if is_inverted {
        (Swatch::Afternoon, Swatch::Morning)
    } else {
        (Swatch::Morning, Swatch::Afternoon)
    };
    [
        LegendEntry {
            label: "Ranek",
            swatch: morning,
        },
        LegendEntry {
            label: "Święto",
            swatch: Swatch::Holiday,
        },
        LegendEntry {
            label: "Popołudnie",
            swatch: afternoon,
        },
    ]
}

pub const SWAPPED_NOTE: &str = "Kolory zamienione";

fn header_swatch(label: &str) -> Swatch {
    match label {
        "Nd" => Swatch::HeaderSunday,
        "Sb" => Swatch::HeaderSaturday,
        _ => Swatch::HeaderWeekday,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCell {
    Empty,
    Day {
        date: CalendarDate,
        category: DayCategory,
    },
}

impl ViewCell {
    pub fn swatch(&self) -> Swatch {
        match self {
            ViewCell::Empty => Swatch::Empty,
            ViewCell::Day { category, .. } => Swatch::from(*category),
        }
    }
}

/// Tout ce qu'il faut pour dessiner un mois.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub title: String,
    pub cells: Vec<ViewCell>,
    pub legend: [LegendEntry; 3],
    pub is_inverted: bool,
}

impl MonthView {
    pub fn build(
        calendar: &ShiftCalendar,
        year: i32,
        month: u32,
        is_inverted: bool,
    ) -> Result<Self, CalendarError> {
        let grid = calendar.month_grid(year, month)?;
        let cells = grid
            .cells()
            .iter()
            .map(|cell| match cell {
                Some(date) => ViewCell::Day {
                    date: *date,
                    category: calendar.categorize(*date, is_inverted),
                },
                None => ViewCell::Empty,
            })
            .collect();
        Ok(Self {
            title: format!("{} {}", month_label(month)?, year),
            cells,
            legend: legend(is_inverted),
            is_inverted,
        })
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[ViewCell]> {
        self.cells.chunks(COLUMNS)
    }
}

/// Permet de changer le rendu (texte brut, terminal couleur…).
pub trait GridRenderer {
    fn render(&self, view: &MonthView) -> String;
}

/// Texte sans couleur : un repère par catégorie après le numéro du jour.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainText;

impl GridRenderer for PlainText {
    fn render(&self, view: &MonthView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", view.title);

        out.push('|');
        for label in WEEKDAY_HEADERS {
            let _ = write!(out, "{label:<3}|");
        }
        out.push('\n');

        for week in view.weeks() {
            out.push('|');
            for cell in week {
                match cell {
                    ViewCell::Empty => out.push_str("   "),
                    ViewCell::Day { date, .. } => {
                        let _ = write!(out, "{:02}{}", date.day(), cell.swatch().marker());
                    }
                }
                out.push('|');
            }
            out.push('\n');
        }

        let legend: Vec<String> = view
            .legend
            .iter()
            .map(|e| format!("[{}] {}", e.swatch.marker(), e.label))
            .collect();
        let _ = writeln!(out, "{}", legend.join("  "));
        if view.is_inverted {
            let _ = writeln!(out, "{SWAPPED_NOTE}");
        }
        out
    }
}

/// Terminal ANSI 24 bits : fonds colorés comme l'écran d'origine.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiColor;

const TEXT: Rgb = Rgb(0xF0, 0xF8, 0xFF);
const RESET: &str = "\x1b[0m";

fn paint(out: &mut String, swatch: Swatch, text: &str) {
    let Rgb(r, g, b) = swatch.rgb();
    let Rgb(fr, fg, fb) = TEXT;
    let _ = write!(out, "\x1b[48;2;{r};{g};{b}m\x1b[38;2;{fr};{fg};{fb}m{text}{RESET}");
}

impl GridRenderer for AnsiColor {
    fn render(&self, view: &MonthView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", view.title);

        for label in WEEKDAY_HEADERS {
            paint(&mut out, header_swatch(label), &format!(" {label} "));
        }
        out.push('\n');

        for week in view.weeks() {
            for cell in week {
                let text = match cell {
                    ViewCell::Empty => "    ".to_string(),
                    ViewCell::Day { date, .. } => format!(" {:02} ", date.day()),
                };
                paint(&mut out, cell.swatch(), &text);
            }
            out.push('\n');
        }

        for entry in &view.legend {
            paint(&mut out, entry.swatch, &format!(" {} ", entry.label));
        }
        out.push('\n');
        if view.is_inverted {
            let _ = writeln!(out, "{SWAPPED_NOTE}");
        }
        out
    }
}
