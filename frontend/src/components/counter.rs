use yew::prelude::*;

use crate::config;
use crate::hooks::use_count_up;
use crate::motion::counter::counter_label;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub value: i64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(config::COUNTER_DURATION_SECS)]
    pub duration: f64,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let shown = use_count_up(node.clone(), props.value, props.duration);

    html! {
        <div ref={node} class="counter">
            <div class="counter-value">
                { counter_label(shown, &props.suffix) }
            </div>
            <div class="counter-label">{ props.label.clone() }</div>
        </div>
    }
}

/// (target, label, suffix)
pub const STATS: &[(i64, &str, &str)] = &[
    (300, "Estúdios Ativos", "+"),
    (15, "Anos de História", ""),
    (50, "Cidades", "+"),
    (98, "Satisfação (NPS)", "%"),
];

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    html! {
        <div class="container">
            <div class="stats-panel">
                <div class="stats-grid">
                    {
                        STATS.iter().map(|(value, label, suffix)| html! {
                            <Counter
                                key={*label}
                                value={*value}
                                label={*label}
                                suffix={*suffix}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_are_non_negative_with_short_suffixes() {
        assert_eq!(STATS.len(), 4);
        for (value, label, suffix) in STATS {
            assert!(*value >= 0, "{} has a negative target", label);
            assert!(suffix.chars().count() <= 1);
        }
    }
}
