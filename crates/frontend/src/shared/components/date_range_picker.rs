use chrono::{Datelike, Duration, Local, NaiveDate};
use leptos::prelude::*;
use thaw::*;

/// First and last day of the month containing `day`, as `YYYY-MM-DD`.
pub fn month_bounds(day: NaiveDate) -> Option<(String, String)> {
    let start = NaiveDate::from_ymd_opt(day.year(), day.month(), 1)?;
    let next = if day.month() == 12 {
        NaiveDate::from_ymd_opt(day.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1)?
    };
    let end = next - Duration::days(1);
    Some((
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    ))
}

/// DateRangePicker component - two date inputs with quick buttons.
///
/// Values are `YYYY-MM-DD`; an empty string means "no bound".
#[component]
pub fn DateRangePicker(
    date_from: RwSignal<String>,
    date_to: RwSignal<String>,
    #[prop(optional)] label: Option<&'static str>,
) -> impl IntoView {
    let this_month = move |_| {
        if let Some((from, to)) = month_bounds(Local::now().date_naive()) {
            date_from.set(from);
            date_to.set(to);
        }
    };
    let clear = move |_| {
        date_from.set(String::new());
        date_to.set(String::new());
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_from.get()
                    on:input=move |ev| date_from.set(event_target_value(&ev))
                />
                <span>"to"</span>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_to.get()
                    on:input=move |ev| date_to.set(event_target_value(&ev))
                />
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=this_month>
                    "This month"
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=clear>
                    "Clear"
                </Button>
            </Flex>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn december_rolls_over() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        assert_eq!(
            month_bounds(day),
            Some(("2024-12-01".to_string(), "2024-12-31".to_string()))
        );
    }

    #[test]
    fn leap_february() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        assert_eq!(month_bounds(day).unwrap().1, "2024-02-29");
    }
}
