#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub page: u32,
    pub active: bool,
}

/// One control per page, ascending, no windowing. A single page needs no
/// controls at all.
pub fn page_controls(current_page: u32, total_pages: u32) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    (1..=total_pages)
        .map(|page| PageControl {
            page,
            active: page == current_page,
        })
        .collect()
}
