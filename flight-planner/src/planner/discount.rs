//! Discount assignment.
//!
//! Compensates travelers stuck with a trip much longer than the best
//! comparable alternative, with an extra incentive for whoever bears the
//! longest idle time.

use tracing::debug;

use crate::domain::Itinerary;

/// Elapsed-time multiple of the baseline beyond which a trip is "long".
const DURATION_THRESHOLD_FACTOR: f64 = 1.5;

/// Discount for exceeding the duration threshold, as a fraction of the
/// pre-discount price.
const LONG_TRIP_DISCOUNT: f64 = 0.5;

/// Additional discount for bearing the maximum idle time in the set.
const MAX_IDLE_DISCOUNT: f64 = 0.2;

/// Cap on the combined discount.
const DISCOUNT_CAP: f64 = 0.7;

/// Apply discounts in place, against the given baseline duration.
///
/// Per itinerary: if its total elapsed time is at least `baseline * 1.5`,
/// it receives 50% of its pre-discount price back, plus a further 20% when
/// its idle time equals the maximum idle time observed across the whole
/// set and that maximum is positive. The combined discount is capped at
/// 70% of the pre-discount price and subtracted from the price used by
/// every downstream stage. Itineraries below the threshold are untouched.
pub fn apply_discounts(itineraries: &mut [Itinerary], baseline: f64) {
    let threshold = baseline * DURATION_THRESHOLD_FACTOR;
    let max_idle = itineraries
        .iter()
        .map(Itinerary::idle_time)
        .fold(0.0, f64::max);

    let mut discounted = 0usize;
    for itinerary in itineraries.iter_mut() {
        if itinerary.total_elapsed() < threshold {
            continue;
        }

        let mut discount = itinerary.original_price() * LONG_TRIP_DISCOUNT;
        if itinerary.idle_time() == max_idle && max_idle > 0.0 {
            discount += itinerary.original_price() * MAX_IDLE_DISCOUNT;
        }
        discount = discount.min(itinerary.original_price() * DISCOUNT_CAP);

        itinerary.apply_discount(discount);
        discounted += 1;
    }

    debug!(
        threshold_hours = threshold,
        discounted,
        total = itineraries.len(),
        "discount assignment complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Airport, Carrier, ItineraryId, Leg, LegId, parse_timestamp};

    fn make_leg(
        id: u32,
        origin: &str,
        destination: &str,
        dep: &str,
        arr: &str,
        price: f64,
    ) -> Leg {
        Leg::new(
            LegId::new(id),
            Airport::parse(origin).unwrap(),
            Airport::parse(destination).unwrap(),
            parse_timestamp(dep).unwrap(),
            parse_timestamp(arr).unwrap(),
            Carrier::parse("AA").unwrap(),
            "American Airlines".into(),
            1000 + id,
            price,
            500.0,
        )
        .unwrap()
    }

    /// Direct NYC -> MIA, 3h, for the given price.
    fn fast_direct(id: u32, price: f64) -> Itinerary {
        Itinerary::assemble(
            ItineraryId::new(id),
            vec![make_leg(
                id,
                "NYC",
                "MIA",
                "10-07-2024 12:00:00",
                "10-07-2024 15:00:00",
                price,
            )],
        )
        .unwrap()
    }

    /// NYC -> CHI -> MIA with the given idle gap between 2h legs.
    fn slow_one_stop(id: u32, idle_hours: i64, price_per_leg: f64) -> Itinerary {
        let dep2 = parse_timestamp("10-07-2024 10:00:00").unwrap()
            + chrono::Duration::hours(idle_hours);
        let arr2 = dep2 + chrono::Duration::hours(2);
        let leg1 = make_leg(
            id * 10,
            "NYC",
            "CHI",
            "10-07-2024 08:00:00",
            "10-07-2024 10:00:00",
            price_per_leg,
        );
        let leg2 = Leg::new(
            LegId::new(id * 10 + 1),
            Airport::parse("CHI").unwrap(),
            Airport::parse("MIA").unwrap(),
            dep2,
            arr2,
            Carrier::parse("AA").unwrap(),
            "American Airlines".into(),
            2000 + id,
            price_per_leg,
            500.0,
        )
        .unwrap();
        Itinerary::assemble(ItineraryId::new(id), vec![leg1, leg2]).unwrap()
    }

    #[test]
    fn below_threshold_gets_no_discount() {
        // Baseline 3h, threshold 4.5h; a 4h trip stays at full price.
        let mut itineraries = vec![
            fast_direct(1, 200.0),
            slow_one_stop(2, 0, 150.0), // 2h + 0h + 2h = 4h elapsed
        ];
        apply_discounts(&mut itineraries, 3.0);

        assert_eq!(itineraries[0].discount(), 0.0);
        assert_eq!(itineraries[0].price(), 200.0);
        assert_eq!(itineraries[1].discount(), 0.0);
        assert_eq!(itineraries[1].price(), 300.0);
    }

    #[test]
    fn long_trip_gets_half_off() {
        // 2h + 2h + 2h = 6h elapsed >= 4.5h threshold, but a second
        // itinerary bears a longer idle, so no idle bonus here.
        let mut itineraries = vec![
            fast_direct(1, 200.0),
            slow_one_stop(2, 2, 150.0), // 6h elapsed, 2h idle
            slow_one_stop(3, 4, 150.0), // 8h elapsed, 4h idle
        ];
        apply_discounts(&mut itineraries, 3.0);

        assert!((itineraries[1].discount() - 150.0).abs() < 1e-9);
        assert!((itineraries[1].price() - 150.0).abs() < 1e-9);
        assert_eq!(itineraries[1].discount_percentage(), 50.0);
    }

    #[test]
    fn max_idle_bonus_hits_the_cap() {
        // The longest-idle long trip gets 50% + 20%, capped at 70%.
        let mut itineraries = vec![
            fast_direct(1, 200.0),
            slow_one_stop(2, 4, 150.0), // 8h elapsed, max idle
        ];
        apply_discounts(&mut itineraries, 3.0);

        assert!((itineraries[1].discount() - 300.0 * 0.7).abs() < 1e-9);
        assert!((itineraries[1].price() - 90.0).abs() < 1e-9);
        assert!((itineraries[1].discount_percentage() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn zero_max_idle_earns_no_bonus() {
        // A long direct trip has zero idle; with no idle anywhere in the
        // set, only the 50% discount applies.
        let slow_direct = Itinerary::assemble(
            ItineraryId::new(2),
            vec![make_leg(
                2,
                "NYC",
                "MIA",
                "10-07-2024 12:00:00",
                "10-07-2024 20:00:00",
                400.0,
            )],
        )
        .unwrap();
        let mut itineraries = vec![fast_direct(1, 200.0), slow_direct];
        apply_discounts(&mut itineraries, 3.0);

        assert!((itineraries[1].discount() - 200.0).abs() < 1e-9);
        assert_eq!(itineraries[1].discount_percentage(), 50.0);
    }

    #[test]
    fn discounted_price_matches_percentage() {
        let mut itineraries = vec![fast_direct(1, 200.0), slow_one_stop(2, 4, 150.0)];
        apply_discounts(&mut itineraries, 3.0);

        for itinerary in &itineraries {
            let expected =
                itinerary.original_price() * (1.0 - itinerary.discount_percentage() / 100.0);
            assert!((itinerary.price() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn exactly_at_threshold_is_discounted() {
        // 2h + 0.5h... use baseline such that threshold equals elapsed.
        // 6h elapsed with baseline 4.0 => threshold 6.0, inclusive.
        let mut itineraries = vec![slow_one_stop(1, 2, 150.0)]; // 6h elapsed
        apply_discounts(&mut itineraries, 4.0);

        assert!(itineraries[0].discount() > 0.0);
    }
}
