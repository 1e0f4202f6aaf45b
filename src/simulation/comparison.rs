use rand::Rng;

use crate::config::SIMULATION;
use crate::simulation::waveform::{SimulatedCurve, simulate};

/// Stable vs volatile reference curves shown side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonCurves {
    pub stable: SimulatedCurve,
    pub volatile: SimulatedCurve,
}

/// Runs the two fixed reference simulations. They ignore the user's
/// controls entirely.
pub fn compare<R: Rng + ?Sized>(rng: &mut R) -> ComparisonCurves {
    let stable = simulate(&SIMULATION.stable_reference, rng);
    let volatile = simulate(&SIMULATION.volatile_reference, rng);
    ComparisonCurves { stable, volatile }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{Pattern, SimulationParams};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_reference_literals() {
        let stable = SimulationParams {
            pattern: Pattern::Sine,
            amplitude: 5.0,
            frequency: 1.0,
            drift: 0.0,
            shock: false,
        };
        assert_eq!(SIMULATION.stable_reference, stable);
        assert_eq!(
            SIMULATION.volatile_reference,
            SimulationParams {
                amplitude: 30.0,
                frequency: 5.0,
                shock: true,
                ..stable
            }
        );
    }

    #[test]
    fn test_curves_match_direct_simulation() {
        let curves = compare(&mut StdRng::seed_from_u64(21));

        let stable = simulate(&SIMULATION.stable_reference, &mut StdRng::seed_from_u64(0));
        assert_eq!(curves.stable, stable);

        // The stable curve draws nothing, so the volatile one sees the same stream
        let volatile = simulate(&SIMULATION.volatile_reference, &mut StdRng::seed_from_u64(21));
        assert_eq!(curves.volatile, volatile);
    }

    #[test]
    fn test_volatile_differs_from_unshocked_in_thirty_places() {
        let curves = compare(&mut StdRng::seed_from_u64(2));
        let unshocked = simulate(
            &SimulationParams {
                shock: false,
                ..SIMULATION.volatile_reference
            },
            &mut StdRng::seed_from_u64(2),
        );
        let differing = curves
            .volatile
            .price
            .iter()
            .zip(&unshocked.price)
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(differing, 30);
    }
}
