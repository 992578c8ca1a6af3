//! XLSX export of the result tables.
//!
//! Produces an in-memory workbook with one sheet per result table. Writing
//! the bytes anywhere is left to the caller.


use crate::cli::types::{DraftYear, LeagueName};
use crate::error::Result;
use crate::models::{
    BpaAggregate, DraftQualityRow, PickRecord, QualityScope, ResultTables, WeightedRankRow,
};
use log::debug;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

/// Content type of the exported workbook.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Sheet names, in workbook order.
pub const SHEET_NAMES: [&str; 4] = ["bpa_df", "weighted_rank", "top_20", "draft_quality"];

/// A single cell value. `Empty` is written as a blank cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl Cell {
    fn text(value: impl ToString) -> Self {
        Cell::Text(value.to_string())
    }

    fn opt_text(value: Option<impl ToString>) -> Self {
        value.map_or(Cell::Empty, Cell::text)
    }

    fn opt_int(value: Option<impl Into<i64>>) -> Self {
        value.map_or(Cell::Empty, |v| Cell::Int(v.into()))
    }

    fn opt_float(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Float)
    }
}

/// A row type that can be written to a worksheet.
pub trait SheetRow {
    /// Header row, one entry per cell.
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

impl SheetRow for BpaAggregate {
    const HEADERS: &'static [&'static str] = &["Drafted_By", "bpa", "bpa_rank", "verdict"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::opt_text(self.team.as_ref()),
            Cell::opt_float(self.bpa),
            Cell::opt_int(self.bpa_rank),
            Cell::text(self.verdict),
        ]
    }
}

impl SheetRow for WeightedRankRow {
    const HEADERS: &'static [&'static str] = &[
        "bpa_rank",
        "weighted_rank",
        "Drafted_By",
        "weighted_value",
        "verdict",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::opt_int(self.bpa_rank),
            Cell::opt_int(self.weighted_rank),
            Cell::opt_text(self.team.as_ref()),
            Cell::opt_float(self.weighted_value),
            Cell::text(self.verdict),
        ]
    }
}

impl SheetRow for PickRecord {
    const HEADERS: &'static [&'static str] = &[
        "Player_ID",
        "First_Name",
        "Last_Name",
        "Position",
        "Drafted_By",
        "Draft_Round",
        "Drafted_Position",
        "Draft_Year",
        "Future_Overall",
        "expected_FV",
        "difference_BPA",
        "pos_avg",
        "weighted_value",
    ];

    fn cells(&self) -> Vec<Cell> {
        let pick = &self.pick;
        let metrics = &self.metrics;
        vec![
            Cell::Int(pick.player_id.as_u64() as i64),
            Cell::text(&pick.first_name),
            Cell::text(&pick.last_name),
            Cell::opt_text(pick.position.as_ref()),
            Cell::opt_text(pick.team.as_ref()),
            Cell::opt_int(pick.round.map(|r| r.as_u8())),
            Cell::opt_int(pick.slot.map(|s| s.as_u16())),
            Cell::Int(pick.draft_year.as_u16().into()),
            Cell::opt_int(pick.future_overall),
            Cell::Int(metrics.expected_fv),
            Cell::opt_int(metrics.bpa),
            Cell::Float(metrics.pos_avg),
            Cell::opt_int(metrics.weighted_value),
        ]
    }
}

impl SheetRow for DraftQualityRow {
    const HEADERS: &'static [&'static str] = &["Draft_Round", "average value"];

    fn cells(&self) -> Vec<Cell> {
        let scope = match self.scope {
            QualityScope::Round(round) => Cell::Int(round.as_u8().into()),
            QualityScope::Overall => Cell::text(self.scope),
        };
        vec![scope, Cell::opt_float(self.average_value)]
    }
}

/// A serialized workbook and the name it should be saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedWorkbook {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// `{league}_{year}_DraftGrades.xlsx`
///
/// ```rust
/// use draft_grades::{export::workbook_filename, DraftYear, LeagueName};
///
/// let league: LeagueName = "SHL".parse().unwrap();
/// assert_eq!(workbook_filename(&league, DraftYear::new(2024)), "SHL_2024_DraftGrades.xlsx");
/// ```
pub fn workbook_filename(league: &LeagueName, year: DraftYear) -> String {
    format!("{}_{}_DraftGrades.xlsx", league, year)
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Int(v) => {
            sheet.write_number(row, col, *v as f64)?;
        }
        Cell::Float(v) => {
            sheet.write_number(row, col, *v)?;
        }
        Cell::Text(v) => {
            sheet.write_string(row, col, v)?;
        }
        Cell::Empty => {}
    }
    Ok(())
}

fn write_sheet<R: SheetRow>(
    workbook: &mut Workbook,
    name: &str,
    rows: &[R],
    header_format: &Format,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;

    for (col, header) in R::HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        for (col, cell) in row.cells().iter().enumerate() {
            write_cell(sheet, i as u32 + 1, col as u16, cell)?;
        }
    }

    debug!("wrote sheet {} with {} rows", name, rows.len());
    Ok(())
}

/// Serialize the four result tables into one XLSX workbook.
pub fn export_workbook(
    tables: &ResultTables,
    league: &LeagueName,
    year: DraftYear,
) -> Result<ExportedWorkbook> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let [bpa, weighted, top, quality] = SHEET_NAMES;
    write_sheet(&mut workbook, bpa, &tables.bpa_df, &bold)?;
    write_sheet(&mut workbook, weighted, &tables.weighted_rank, &bold)?;
    write_sheet(&mut workbook, top, &tables.top_20, &bold)?;
    write_sheet(&mut workbook, quality, &tables.draft_quality, &bold)?;

    Ok(ExportedWorkbook {
        filename: workbook_filename(league, year),
        bytes: workbook.save_to_buffer()?,
    })
}
