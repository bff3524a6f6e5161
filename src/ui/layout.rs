use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns taken by one numbered cell in the question grid.
pub const GRID_CELL_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub analysis_area: Rect,
    pub grid_area: Rect,
    pub notice_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub popup_area: Rect,
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(6),
        ])
        .split(body[0]);

    QuizLayout {
        header_area: chunks[0],
        question_area: left[0],
        options_area: left[1],
        analysis_area: left[2],
        grid_area: body[1],
        notice_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let popup_area = crate::utils::centered_rect(50, 60, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(popup_area);

    SummaryLayout {
        popup_area,
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}

fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

impl QuizLayout {
    pub fn grid_columns(&self) -> usize {
        (inner(self.grid_area).width / GRID_CELL_WIDTH).max(1) as usize
    }

    /// First grid row drawn, chosen so the active question stays visible.
    pub fn grid_first_row(&self, active: usize) -> usize {
        let visible = inner(self.grid_area).height.max(1) as usize;
        let active_row = active / self.grid_columns();
        active_row.saturating_sub(visible - 1)
    }

    pub fn grid_cell_at(&self, column: u16, row: u16, count: usize, active: usize) -> Option<usize> {
        let area = inner(self.grid_area);
        if !contains(area, column, row) {
            return None;
        }
        let col = ((column - area.x) / GRID_CELL_WIDTH) as usize;
        let columns = self.grid_columns();
        if col >= columns {
            return None;
        }
        let grid_row = (row - area.y) as usize + self.grid_first_row(active);
        let index = grid_row * columns + col;
        (index < count).then_some(index)
    }

    /// First option drawn, chosen so the cursor row stays visible.
    pub fn options_first_row(&self, cursor: usize) -> usize {
        let visible = inner(self.options_area).height.max(1) as usize;
        cursor.saturating_sub(visible - 1)
    }

    /// Options are drawn one per line, scrolled by `options_first_row`.
    pub fn option_at(&self, column: u16, row: u16, count: usize, cursor: usize) -> Option<usize> {
        let area = inner(self.options_area);
        if !contains(area, column, row) {
            return None;
        }
        let index = (row - area.y) as usize + self.options_first_row(cursor);
        (index < count).then_some(index)
    }
}
