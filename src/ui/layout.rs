use ratatui::layout::Rect;

pub const SIDEBAR_WIDTH: u16 = 28;
pub const BOTTOM_NAV_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
pub const LOGIN_PANEL_WIDTH: u16 = 54;
pub const LOGIN_PANEL_HEIGHT: u16 = 22;

/// Navigation chrome. Both variants drive the same tab state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    Sidebar,
    BottomNav,
}

pub fn chrome_for(width: u16, wide_breakpoint: u16) -> Chrome {
    if width >= wide_breakpoint {
        Chrome::Sidebar
    } else {
        Chrome::BottomNav
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellRegions {
    pub nav: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn shell_regions(area: Rect, chrome: Chrome) -> ShellRegions {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let content_height = area.height.saturating_sub(footer_height);

    match chrome {
        Chrome::Sidebar => {
            let nav_width = SIDEBAR_WIDTH.min(area.width);
            let nav = Rect {
                x: area.x,
                y: area.y,
                width: nav_width,
                height: content_height,
            };
            let body = Rect {
                x: area.x + nav_width,
                y: area.y,
                width: area.width.saturating_sub(nav_width),
                height: content_height,
            };
            ShellRegions { nav, body, footer }
        }
        Chrome::BottomNav => {
            let nav_height = BOTTOM_NAV_HEIGHT.min(content_height);
            let body = Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: content_height.saturating_sub(nav_height),
            };
            let nav = Rect {
                x: area.x,
                y: area.y + body.height,
                width: area.width,
                height: nav_height,
            };
            ShellRegions { nav, body, footer }
        }
    }
}

/// Rectangle of at most `width`×`height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    #[test]
    fn breakpoint_picks_chrome() {
        assert_eq!(chrome_for(100, 100), Chrome::Sidebar);
        assert_eq!(chrome_for(99, 100), Chrome::BottomNav);
    }

    #[test]
    fn sidebar_regions_split_horizontally() {
        let regions = shell_regions(AREA, Chrome::Sidebar);
        assert_eq!(regions.nav.width, SIDEBAR_WIDTH);
        assert_eq!(regions.body.x, SIDEBAR_WIDTH);
        assert_eq!(regions.body.width, AREA.width - SIDEBAR_WIDTH);
        assert_eq!(regions.footer.y, AREA.height - FOOTER_HEIGHT);
    }

    #[test]
    fn bottom_nav_sits_above_footer() {
        let regions = shell_regions(AREA, Chrome::BottomNav);
        assert_eq!(regions.nav.height, BOTTOM_NAV_HEIGHT);
        assert_eq!(regions.nav.y + regions.nav.height, regions.footer.y);
        assert_eq!(regions.body.height, AREA.height - FOOTER_HEIGHT - BOTTOM_NAV_HEIGHT);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let tiny = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 2,
        };
        let regions = shell_regions(tiny, Chrome::BottomNav);
        assert_eq!(regions.body.height, 0);
        let centered = centered_rect_by_size(tiny, 50, 50);
        assert_eq!(centered, tiny);
    }
}
