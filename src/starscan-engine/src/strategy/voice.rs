//! Scenario-flavored status lines, one voice per scenario.

use starscan_protocol::{Scenario, Value};

pub(crate) fn scanning(scenario: Scenario, index: usize, target: &Value) -> String {
    match scenario {
        Scenario::Space => format!("FIRING LASER at Sector [{index}]..."),
        _ => format!("SCANNING entry [{index}] for {target}..."),
    }
}

pub(crate) fn found(scenario: Scenario, index: usize) -> String {
    match scenario {
        Scenario::Space => format!("TARGET DESTROYED at coordinate [{index}]!"),
        _ => format!("MATCH FOUND at position [{index}]!"),
    }
}

pub(crate) fn linear_failed(scenario: Scenario) -> String {
    match scenario {
        Scenario::Space => "AMMO DEPLETED. Enemy escaped.".to_string(),
        _ => "SEARCH FAILED. Target missing.".to_string(),
    }
}

pub(crate) fn narrowing(scenario: Scenario, left: usize, right: usize) -> String {
    match scenario {
        Scenario::Space => {
            format!("ISOLATING SECTORS [{left} ... {right}]. Preparing Hyper-Jump.")
        }
        _ => format!("NARROWING SEARCH to [{left} ... {right}]."),
    }
}

pub(crate) fn probing(scenario: Scenario, mid: usize) -> String {
    match scenario {
        Scenario::Space => format!("HYPER-JUMP to Sector [{mid}]! Scanning..."),
        _ => format!("CHECKING middle position [{mid}]..."),
    }
}

pub(crate) fn discard_low(scenario: Scenario, mid: usize) -> String {
    match scenario {
        Scenario::Space => format!("Too high. Discarding below [{}].", mid + 1),
        _ => "Target is higher. Moving right.".to_string(),
    }
}

pub(crate) fn discard_high(scenario: Scenario, mid: usize) -> String {
    match scenario {
        Scenario::Space => format!("Too low. Discarding above [{}].", mid.saturating_sub(1)),
        _ => "Target is lower. Moving left.".to_string(),
    }
}

pub(crate) fn binary_failed(scenario: Scenario) -> String {
    match scenario {
        Scenario::Space => "TRACKING FAILED. Enemy lost.".to_string(),
        _ => "SEARCH FAILED. Target missing.".to_string(),
    }
}
