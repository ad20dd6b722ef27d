//! Property tests for the utilization arithmetic.
#![allow(clippy::unwrap_used)]

use proctop::{calc, CpuSample};
use proptest::prelude::*;

fn arb_sample() -> impl Strategy<Value = CpuSample> {
    any::<[u32; 10]>().prop_map(|f| CpuSample {
        user: u64::from(f[0]),
        nice: u64::from(f[1]),
        system: u64::from(f[2]),
        idle: u64::from(f[3]),
        iowait: u64::from(f[4]),
        irq: u64::from(f[5]),
        softirq: u64::from(f[6]),
        steal: u64::from(f[7]),
        guest: u64::from(f[8]),
        guest_nice: u64::from(f[9]),
    })
}

/// A pair of samples where every counter grew monotonically.
fn arb_monotone_pair() -> impl Strategy<Value = (CpuSample, CpuSample)> {
    (arb_sample(), any::<[u32; 10]>()).prop_map(|(prev, grow)| {
        let curr = CpuSample {
            user: prev.user + u64::from(grow[0]),
            nice: prev.nice + u64::from(grow[1]),
            system: prev.system + u64::from(grow[2]),
            idle: prev.idle + u64::from(grow[3]),
            iowait: prev.iowait + u64::from(grow[4]),
            irq: prev.irq + u64::from(grow[5]),
            softirq: prev.softirq + u64::from(grow[6]),
            steal: prev.steal + u64::from(grow[7]),
            guest: prev.guest + u64::from(grow[8]),
            guest_nice: prev.guest_nice + u64::from(grow[9]),
        };
        (prev, curr)
    })
}

proptest! {
    #[test]
    fn active_plus_idle_plus_iowait_is_total(sample in arb_sample()) {
        prop_assert_eq!(
            sample.active() + sample.idle + sample.iowait,
            sample.total()
        );
    }

    #[test]
    fn snapshot_ratio_is_a_fraction(sample in arb_sample()) {
        prop_assume!(sample.total() > 0);
        let ratio = calc::cpu_utilization(&sample);
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn interval_ratio_is_a_fraction(pair in arb_monotone_pair()) {
        let (prev, curr) = pair;
        let ratio = calc::cpu_utilization_between(&prev, &curr);
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn memory_ratio_is_a_fraction(a in any::<u32>(), b in any::<u32>()) {
        let total = f64::from(a.max(b).max(1));
        let free = f64::from(a.min(b));
        let ratio = calc::memory_utilization(total, free);
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn format_wraps_at_one_day(seconds in 0u64..10_000_000) {
        prop_assert_eq!(
            calc::format_elapsed(seconds),
            calc::format_elapsed(seconds % 86_400)
        );
    }

    #[test]
    fn format_is_always_eight_zero_padded_chars(seconds in any::<u64>()) {
        let formatted = calc::format_elapsed(seconds);
        prop_assert_eq!(formatted.len(), 8);
        let bytes = formatted.as_bytes();
        prop_assert_eq!(bytes[2], b':');
        prop_assert_eq!(bytes[5], b':');
    }

    #[test]
    fn format_fields_stay_in_range(seconds in any::<u64>()) {
        let formatted = calc::format_elapsed(seconds);
        let mut fields = formatted.split(':');
        let hours: u64 = fields.next().unwrap().parse().unwrap();
        let minutes: u64 = fields.next().unwrap().parse().unwrap();
        let secs: u64 = fields.next().unwrap().parse().unwrap();
        prop_assert!(hours < 24);
        prop_assert!(minutes < 60);
        prop_assert!(secs < 60);
    }

    #[test]
    fn process_uptime_never_exceeds_system_uptime(
        start_ticks in any::<u64>(),
        uptime in any::<u64>(),
        tps in 1u64..=1000,
    ) {
        prop_assert!(calc::process_uptime_seconds(start_ticks, uptime, tps) <= uptime);
    }
}
