use std::fmt;

pub const METRICS_REGION: &str = "metrics";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Success,
    Latency,
    Traffic,
    Mttr,
    Cycle,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Success,
        MetricKind::Latency,
        MetricKind::Traffic,
        MetricKind::Mttr,
        MetricKind::Cycle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Latency => "latency",
            Self::Traffic => "traffic",
            Self::Mttr => "mttr",
            Self::Cycle => "cycle",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Success => 0,
            Self::Latency => 1,
            Self::Traffic => 2,
            Self::Mttr => 3,
            Self::Cycle => 4,
        }
    }

    pub fn spec(self) -> &'static MetricSpec {
        &METRIC_SPECS[self.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricSpec {
    /// Target in units of `10^-decimals`, e.g. 99.95 with two decimals is 9995.
    pub target_units: u32,
    pub decimals: u8,
    pub suffix: &'static str,
}

// Indexed by `MetricKind::index`.
pub static METRIC_SPECS: [MetricSpec; 5] = [
    MetricSpec {
        target_units: 9_995,
        decimals: 2,
        suffix: "%",
    },
    MetricSpec {
        target_units: 65,
        decimals: 0,
        suffix: "%",
    },
    MetricSpec {
        target_units: 30,
        decimals: 1,
        suffix: "x",
    },
    MetricSpec {
        target_units: 30,
        decimals: 0,
        suffix: "min",
    },
    MetricSpec {
        target_units: 80,
        decimals: 0,
        suffix: "%",
    },
];

impl MetricSpec {
    // Fixed-point, so each step truncates at the display precision and the
    // last step lands on the target exactly.
    pub fn value_at(&self, step: u32, steps: u32) -> MetricValue {
        let steps = steps.max(1);
        let step = step.min(steps);
        let units = u64::from(self.target_units) * u64::from(step) / u64::from(steps);

        MetricValue {
            units: units as u32,
            decimals: self.decimals,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricValue {
    units: u32,
    decimals: u8,
}

impl MetricValue {
    #[cfg(test)]
    pub fn units(self) -> u32 {
        self.units
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.units) / 10_f64.powi(i32::from(self.decimals))
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decimals == 0 {
            return write!(f, "{}", self.units);
        }

        let scale = 10_u32.pow(u32::from(self.decimals));
        write!(
            f,
            "{}.{:0width$}",
            self.units / scale,
            self.units % scale,
            width = usize::from(self.decimals)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricValues([MetricValue; 5]);

impl MetricValues {
    pub fn zero() -> Self {
        Self::at_step(0, 1)
    }

    pub fn at_step(step: u32, steps: u32) -> Self {
        Self(METRIC_SPECS.map(|spec| spec.value_at(step, steps)))
    }

    pub fn get(&self, kind: MetricKind) -> MetricValue {
        self.0[kind.index()]
    }

    pub fn label(&self, kind: MetricKind) -> String {
        format!("{}{}", self.get(kind), kind.spec().suffix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKind, MetricValue)> + '_ {
        MetricKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    pub fn to_json(&self) -> serde_json::Value {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .iter()
            .map(|(kind, value)| (kind.as_str().to_string(), serde_json::json!(value.as_f64())))
            .collect();
        serde_json::Value::Object(fields)
    }
}

impl Default for MetricValues {
    fn default() -> Self {
        Self::zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Running,
    Finished,
    Cancelled,
}

// Owns no timer; the host calls `tick` once per interval.
#[derive(Clone, Debug)]
pub struct CounterAnimator {
    steps: u32,
    step: u32,
    phase: AnimationPhase,
    values: MetricValues,
}

impl CounterAnimator {
    pub fn new(steps: u32) -> Self {
        Self {
            steps: steps.max(1),
            step: 0,
            phase: AnimationPhase::Idle,
            values: MetricValues::zero(),
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn values(&self) -> MetricValues {
        self.values
    }

    pub fn is_finished(&self) -> bool {
        self.phase == AnimationPhase::Finished
    }

    /// Returns `false` once a run was started, even if it has since ended.
    pub fn begin(&mut self) -> bool {
        if self.phase != AnimationPhase::Idle {
            return false;
        }

        self.phase = AnimationPhase::Running;
        true
    }

    pub fn tick(&mut self) -> Option<MetricValues> {
        if self.phase != AnimationPhase::Running {
            return None;
        }

        self.step += 1;
        self.values = MetricValues::at_step(self.step, self.steps);
        if self.step >= self.steps {
            self.phase = AnimationPhase::Finished;
        }

        Some(self.values)
    }

    /// Returns whether a run was actually interrupted.
    pub fn cancel(&mut self) -> bool {
        if self.phase != AnimationPhase::Running {
            return false;
        }

        self.phase = AnimationPhase::Cancelled;
        true
    }
}
