//! Display seam between the run controller and any rendering layer.

use std::io::{self, Write};

use crate::run::{ConvergenceEvent, DashboardSnapshot};

/// Receiver for per-tick dashboard output.
///
/// Sinks only ever see read-only snapshots and events. A failing sink is a
/// display-layer problem: drivers report the error and keep ticking, and no
/// run state is affected.
pub trait DisplaySink {
    /// Redraw from the post-tick snapshot.
    fn render(&mut self, snapshot: &DashboardSnapshot) -> io::Result<()>;
    /// One-time notification when a method converges.
    fn on_convergence(&mut self, event: &ConvergenceEvent) -> io::Result<()>;
    /// Final notification once all methods have converged.
    fn on_complete(&mut self, snapshot: &DashboardSnapshot) -> io::Result<()>;
}

/// Plain-text renderer for the status line and energy summary.
pub struct ConsoleDisplay<W: Write> {
    out: W,
    verbose: bool,
}

impl ConsoleDisplay<io::Stdout> {
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn render(&mut self, snapshot: &DashboardSnapshot) -> io::Result<()> {
        // The counter has already advanced past the iteration just sampled.
        let shown = snapshot.current_iteration.saturating_sub(1);
        if snapshot.converged_count > 0 {
            writeln!(
                self.out,
                "Iteration {}: {}/3 methods converged",
                shown, snapshot.converged_count
            )?;
        } else {
            writeln!(self.out, "Iteration {}: Generating new quantum data...", shown)?;
        }
        if self.verbose {
            for view in &snapshot.methods {
                match view.latest {
                    Some(energy) if view.converged => writeln!(
                        self.out,
                        "  {:<28} {:>9.4} Hartree  CONVERGED",
                        view.method.label(),
                        energy
                    )?,
                    Some(energy) => writeln!(
                        self.out,
                        "  {:<28} {:>9.4} Hartree",
                        view.method.label(),
                        energy
                    )?,
                    None => writeln!(
                        self.out,
                        "  {:<28} Calculating...",
                        view.method.label()
                    )?,
                }
            }
        }
        Ok(())
    }

    fn on_convergence(&mut self, event: &ConvergenceEvent) -> io::Result<()> {
        writeln!(
            self.out,
            "{} has converged to ground state at iteration {}",
            event.method.key(),
            event.iteration
        )
    }

    fn on_complete(&mut self, snapshot: &DashboardSnapshot) -> io::Result<()> {
        writeln!(
            self.out,
            "Iteration {}: All methods converged - Simulation complete!",
            snapshot.current_iteration.saturating_sub(1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::run::RunController;
    use rand::rngs::mock::StepRng;

    fn rendered(verbose: bool, ticks: usize) -> String {
        let mut run = RunController::new(StepRng::new(0, 0));
        for _ in 0..ticks {
            run.tick();
        }
        let snapshot = run.snapshot();
        let mut display = ConsoleDisplay::new(Vec::new(), verbose);
        display.render(&snapshot).unwrap();
        String::from_utf8(display.out).unwrap()
    }

    #[test]
    fn status_line_names_the_sampled_iteration() {
        let text = rendered(false, 3);
        assert!(text.starts_with("Iteration 2: Generating new quantum data..."));
    }

    #[test]
    fn verbose_render_lists_every_method() {
        let text = rendered(true, 3);
        for method in Method::ALL {
            assert!(text.contains(method.label()), "missing {}", method.label());
        }
        assert!(text.contains("Hartree"));
    }

    #[test]
    fn convergence_notification_uses_the_storage_key() {
        let event = ConvergenceEvent {
            method: Method::VqeUccsdHybridZne,
            iteration: 14,
            energy: -1.59,
        };
        let mut display = ConsoleDisplay::new(Vec::new(), true);
        display.on_convergence(&event).unwrap();
        let text = String::from_utf8(display.out).unwrap();
        assert_eq!(
            text,
            "vqe_uccsd_hybrid_zne has converged to ground state at iteration 14\n"
        );
    }
}
