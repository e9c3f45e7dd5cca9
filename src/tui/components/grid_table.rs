//! Table component drawing a [`DataGrid`] page to the terminal.
//!
//! The table has four header lines (column groups, column headers with sort
//! markers, active filters, a rule) followed by one line per row of the
//! current page. Columns that do not fit the terminal width are scrolled
//! horizontally from `column_offset`.

use std::ops::Range;

use super::text_truncate::fit_to_width;
use crate::grid::{CellPosition, ColumnDef, DataGrid};

/// Separator drawn between columns.
const SEPARATOR: &str = "│";
const SEPARATOR_WIDTH: usize = 1;
/// Separator drawn between columns in the rule line.
const RULE_SEPARATOR: &str = "┼";
const RULE: char = '─';
const REVERSE: &str = "\x1b[7m";
const UNDERLINE: &str = "\x1b[4m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Number of lines the table draws above its rows.
pub const TABLE_HEADER_LINES: usize = 4;

/// Context for rendering the grid table.
#[derive(Debug)]
pub struct GridTableViewContext<'a, R> {
    /// Sort, filter and selection state.
    pub table: &'a DataGrid<R>,
    /// Every row the grid holds.
    pub rows: &'a [R],
    /// Indices into `rows` shown on the current page, in display order.
    pub page_rows: &'a [usize],
    /// Focused cell, if any.
    pub focus: Option<CellPosition>,
    /// First page row drawn.
    pub scroll_offset: usize,
    /// Maximum number of row lines.
    pub visible_height: usize,
    /// First column drawn.
    pub column_offset: usize,
    /// Terminal width in columns.
    pub max_width: usize,
    /// Text shown instead of rows when the page is empty.
    pub empty_message: &'a str,
}

/// Component rendering a grid page as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridTableComponent;

impl GridTableComponent {
    /// Columns (by schema index) that fit in `max_width` starting at
    /// `column_offset`. At least one column is returned when any exist.
    #[must_use]
    pub fn visible_columns<R>(
        table: &DataGrid<R>,
        column_offset: usize,
        max_width: usize,
    ) -> Range<usize> {
        let columns = table.schema().columns();
        let start = column_offset.min(columns.len());
        let mut used = 0_usize;
        let mut end = start;
        for column in columns.iter().skip(start) {
            let needed = column.width().saturating_add(SEPARATOR_WIDTH);
            if end > start && used.saturating_add(needed) > max_width {
                break;
            }
            used = used.saturating_add(needed);
            end = end.saturating_add(1);
        }
        start..end
    }

    /// Renders the table as a string.
    #[must_use]
    pub fn view<R>(ctx: &GridTableViewContext<'_, R>) -> String {
        let columns = Self::visible_columns(ctx.table, ctx.column_offset, ctx.max_width);
        let mut output = String::new();

        output.push_str(&Self::render_group_row(ctx.table, &columns));
        output.push_str(&Self::render_header_row(ctx.table, &columns));
        output.push_str(&Self::render_filter_row(ctx.table, &columns));
        output.push_str(&Self::render_rule(ctx.table, &columns));

        if ctx.page_rows.is_empty() {
            output.push_str("  ");
            output.push_str(ctx.empty_message);
            output.push('\n');
            return output;
        }

        for &row_index in ctx
            .page_rows
            .iter()
            .skip(ctx.scroll_offset)
            .take(ctx.visible_height.max(1))
        {
            let Some(row) = ctx.rows.get(row_index) else {
                continue;
            };
            output.push_str(&Self::render_row(ctx, &columns, row_index, row));
        }

        output
    }

    fn schema_columns<'t, R>(
        table: &'t DataGrid<R>,
        columns: &Range<usize>,
    ) -> impl Iterator<Item = (usize, &'t ColumnDef<R>)> {
        columns
            .clone()
            .filter_map(|index| table.schema().column(index).map(|column| (index, column)))
    }

    fn render_group_row<R>(table: &DataGrid<R>, columns: &Range<usize>) -> String {
        let mut cells = Vec::new();
        for group in table.schema().groups() {
            let start = group.columns.start.max(columns.start);
            let end = group.columns.end.min(columns.end);
            if start >= end {
                continue;
            }
            let span_width = (start..end)
                .filter_map(|index| table.schema().column(index))
                .map(ColumnDef::width)
                .sum::<usize>()
                .saturating_add(end.saturating_sub(start).saturating_sub(1));
            cells.push(format!("{BOLD}{}{RESET}", fit_to_width(group.header, span_width)));
        }
        Self::join_line(&cells)
    }

    fn render_header_row<R>(table: &DataGrid<R>, columns: &Range<usize>) -> String {
        let multi_sort = table.sort().keys().len() > 1;
        let cells: Vec<_> = Self::schema_columns(table, columns)
            .map(|(index, column)| {
                let label = match table.sort().key_for(index) {
                    Some((order, direction)) if multi_sort => {
                        format!(
                            "{} {}{}",
                            column.header(),
                            direction.marker(),
                            order.saturating_add(1)
                        )
                    }
                    Some((_, direction)) => format!("{} {}", column.header(), direction.marker()),
                    None => column.header().to_owned(),
                };
                format!("{BOLD}{}{RESET}", fit_to_width(&label, column.width()))
            })
            .collect();
        Self::join_line(&cells)
    }

    fn render_filter_row<R>(table: &DataGrid<R>, columns: &Range<usize>) -> String {
        let cells: Vec<_> = Self::schema_columns(table, columns)
            .map(|(index, column)| {
                let text = table
                    .filters()
                    .value_of(index)
                    .map_or_else(String::new, |value| format!("={value}"));
                fit_to_width(&text, column.width())
            })
            .collect();
        Self::join_line(&cells)
    }

    fn render_rule<R>(table: &DataGrid<R>, columns: &Range<usize>) -> String {
        let cells: Vec<String> = Self::schema_columns(table, columns)
            .map(|(_, column)| std::iter::repeat_n(RULE, column.width()).collect())
            .collect();
        let mut line = cells.join(RULE_SEPARATOR);
        line.push('\n');
        line
    }

    fn render_row<R>(
        ctx: &GridTableViewContext<'_, R>,
        columns: &Range<usize>,
        row_index: usize,
        row: &R,
    ) -> String {
        let selected = ctx.table.selected();
        let cells: Vec<_> = Self::schema_columns(ctx.table, columns)
            .map(|(index, column)| {
                let position = CellPosition {
                    row: row_index,
                    column: index,
                };
                let value = column.value(row);
                let text = column.renderer().map_or_else(
                    || fit_to_width(&value.to_string(), column.width()),
                    |render| render(&value, column.width()),
                );
                if ctx.focus == Some(position) {
                    format!("{REVERSE}{text}{RESET}")
                } else if selected == Some(position) {
                    format!("{UNDERLINE}{text}{RESET}")
                } else {
                    text
                }
            })
            .collect();
        Self::join_line(&cells)
    }

    fn join_line(cells: &[String]) -> String {
        let mut line = cells.join(SEPARATOR);
        line.push('\n');
        line
    }
}
