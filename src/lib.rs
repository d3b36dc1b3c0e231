#![forbid(unsafe_code)]
//! Grafik — calendrier de deux zmiany (ranek / popołudnie) en rotation hebdomadaire.
//!
//! - Classification pure d'une date : première ou seconde zmiana.
//! - Jours fériés fixes, samedis et dimanches distingués.
//! - Grille mensuelle de taille fixe, rendu texte ou ANSI.
//! - Inversion des zmiany persistée dans un stockage clé/valeur.

pub mod io;
pub mod model;
pub mod picker;
pub mod preference;
pub mod render;
pub mod schedule;
pub mod storage;

pub use model::CalendarDate;
pub use picker::{month_label, year_range, Selection};
pub use preference::{AssumeYes, Confirm, ShiftPreference, SHIFT_SWAP_KEY};
pub use render::{legend, AnsiColor, GridRenderer, MonthView, PlainText, Swatch};
pub use schedule::{
    build_month_grid, is_first_shift, is_holiday, CalendarError, DayCategory, GridOptions,
    HolidaySet, MonthGrid, ShiftCalendar,
};
pub use storage::{JsonStorage, MemoryStorage, Storage, StorageError};
