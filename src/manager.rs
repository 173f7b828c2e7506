use log::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Task {
    pub row: u32,
}

/// Hands out film rows to worker threads, each row exactly once.
#[derive(Debug)]
pub struct Manager {
    rows: u32,
    next_row: u32,
    report_every: u32,
}

impl Manager {
    pub fn new(rows: u32) -> Self {
        Manager {
            rows,
            next_row: 0,
            report_every: (rows / 10).max(1),
        }
    }

    pub fn next(&mut self, thid: usize) -> Option<Task> {
        if self.next_row >= self.rows {
            return None;
        }
        let row = self.next_row;
        self.next_row += 1;
        if row > 0 && row % self.report_every == 0 {
            info!("{}% of rows dispatched", row * 100 / self.rows);
        }
        trace!("row {} -> thread {}", row, thid);
        Some(Task { row })
    }

    pub fn remaining(&self) -> u32 {
        self.rows - self.next_row
    }
}

#[test]
fn test() {
    let mut manager = Manager::new(5);
    let mut rows = vec![];
    while let Some(task) = manager.next(rows.len() % 2) {
        rows.push(task.row);
    }
    assert_eq!(rows, vec![0, 1, 2, 3, 4]);
    assert_eq!(manager.remaining(), 0);
    assert_eq!(manager.next(0), None);

    let mut empty = Manager::new(0);
    assert_eq!(empty.next(0), None);
}
