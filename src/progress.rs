//! Live reporting of newly recorded lemmas.
//!
//! The tracker pushes events into an unbounded channel and never waits on the
//! reporter thread, so a slow sink cannot stall or alter a run.

extern crate crossbeam_channel;

use std::{io::Write, thread::JoinHandle};

use crossbeam_channel::{unbounded, Sender};
use lexa::{
    core::{FirstOccurrence, Position},
    observer::Observer,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Lemma { lemma: String, position: Position },
    EmptyPage(usize),
}

/// Observer half, handed to the tracker.
#[derive(Clone, Debug)]
pub struct Progress {
    tx: Sender<Event>,
}

impl Observer for Progress {
    fn on_new_lemma(&mut self, record: &FirstOccurrence) {
        let _ = self.tx.send(Event::Lemma {
            lemma: record.lemma().to_string(),
            position: record.position(),
        });
    }

    fn on_empty_page(&mut self, page: usize) {
        let _ = self.tx.send(Event::EmptyPage(page));
    }
}

/// Writer half, draining events on its own thread.
#[derive(Debug)]
pub struct Reporter<W> {
    handle: JoinHandle<W>,
}

impl<W> Reporter<W> {
    /// Waits for every [`Progress`] clone to be dropped and returns the sink.
    pub fn join(self) -> Option<W> {
        self.handle.join().ok()
    }
}

pub fn spawn<W: Write + Send + 'static>(mut sink: W) -> (Progress, Reporter<W>) {
    let (tx, rx) = unbounded();

    let handle = std::thread::spawn(move || {
        for event in rx {
            let _ = match event {
                Event::Lemma { lemma, position } => writeln!(sink, "new lemma: {lemma} ({position})"),
                Event::EmptyPage(page) => writeln!(sink, "page {page}: no text content, skipped"),
            };
        }

        let _ = sink.flush();
        sink
    });

    (Progress { tx }, Reporter { handle })
}

#[cfg(test)]
mod tests {
    use lexa::{
        core::{FirstOccurrence, Position},
        observer::Observer,
    };

    use crate::progress::spawn;

    #[test]
    fn test_progress_reports_in_order() {
        let (mut progress, reporter) = spawn(Vec::new());

        progress.on_new_lemma(&FirstOccurrence::new("run", Position::new(1, 1, 1), 0));
        progress.on_empty_page(2);
        progress.on_new_lemma(&FirstOccurrence::new("runner", Position::new(3, 1, 2), 1));
        drop(progress);

        let output = String::from_utf8(reporter.join().unwrap()).unwrap();

        assert_eq!(
            output,
            "new lemma: run (page 1, line 1, position 1)\n\
             page 2: no text content, skipped\n\
             new lemma: runner (page 3, line 1, position 2)\n"
        );
    }

    #[test]
    fn test_progress_without_events() {
        let (progress, reporter) = spawn(Vec::new());
        drop(progress);

        assert_eq!(reporter.join(), Some(Vec::new()));
    }
}
