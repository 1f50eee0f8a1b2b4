use super::DownloadWindow;

/// Download counts of one package over the last day, week and month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadCounts {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
}

impl DownloadCounts {
    #[must_use]
    pub const fn get(&self, window: DownloadWindow) -> u64 {
        match window {
            DownloadWindow::LastDay => self.daily,
            DownloadWindow::LastWeek => self.weekly,
            DownloadWindow::LastMonth => self.monthly,
        }
    }

    pub const fn set(&mut self, window: DownloadWindow, count: u64) {
        match window {
            DownloadWindow::LastDay => self.daily = count,
            DownloadWindow::LastWeek => self.weekly = count,
            DownloadWindow::LastMonth => self.monthly = count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let counts = DownloadCounts::default();
        assert_eq!(counts.daily, 0);
        assert_eq!(counts.weekly, 0);
        assert_eq!(counts.monthly, 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut counts = DownloadCounts::default();
        counts.set(DownloadWindow::LastDay, 1);
        counts.set(DownloadWindow::LastWeek, 7);
        counts.set(DownloadWindow::LastMonth, 31);

        assert_eq!(counts, DownloadCounts { daily: 1, weekly: 7, monthly: 31 });
        assert_eq!(counts.get(DownloadWindow::LastWeek), 7);
    }
}
