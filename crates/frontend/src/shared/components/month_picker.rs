//! Выбор месяца: год в заголовке, сетка 4×3 из `compute_month_grid`.
//! Стрелки листают годы; выбор отдаёт первое число месяца.

use crate::shared::date_utils::{today, MONTH_SHORT_NAMES};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::shared::calendar::{compute_month_grid, YearMonth};
use contracts::shared::format::format_month;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MonthPicker(
    #[prop(into)] value: Signal<Option<YearMonth>>,
    #[prop(into)] on_change: Callback<NaiveDate>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let cursor = RwSignal::new(
        value
            .get_untracked()
            .unwrap_or_else(|| YearMonth::from_date(today())),
    );
    let placeholder = placeholder.unwrap_or_else(|| "мм.гг".to_string());

    let toggle = move |_| {
        if !open.get_untracked() {
            if let Some(selected) = value.get_untracked() {
                cursor.set(selected);
            }
        }
        open.update(|o| *o = !*o);
    };

    let select_cell = move |row: usize, col: usize| {
        let Some(month) = YearMonth::month_for_cell(row, col) else {
            return;
        };
        let chosen = YearMonth::new(cursor.get_untracked().year, month);
        if let Some(first_day) = chosen.first_day() {
            on_change.run(first_day);
            open.set(false);
        }
    };

    view! {
        <div class="month-picker">
            <div class="month-picker__field" on:click=toggle>
                <input
                    type="text"
                    class="month-picker__input"
                    readonly=true
                    placeholder=placeholder
                    prop:value=move || value.get().map(format_month).unwrap_or_default()
                />
                {icon("calendar")}
            </div>

            <Show when=move || open.get()>
                <div class="month-picker__dropdown">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| cursor.update(|c| *c = c.previous_year())
                        >
                            {icon("chevron-left")}
                        </Button>
                        <span class="month-picker__title">{move || cursor.get().year}</span>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| cursor.update(|c| *c = c.next_year())
                        >
                            {icon("chevron-right")}
                        </Button>
                    </Flex>

                    <table class="month-picker__grid">
                        <tbody>
                            {compute_month_grid(&MONTH_SHORT_NAMES)
                                .into_iter()
                                .enumerate()
                                .map(|(row, months)| view! {
                                    <tr>
                                        {months.into_iter().enumerate().map(|(col, name)| {
                                            let is_selected = move || {
                                                let year = cursor.get().year;
                                                value.get().is_some_and(|v| {
                                                    v.year == year
                                                        && Some(v.month) == YearMonth::month_for_cell(row, col)
                                                })
                                            };
                                            view! {
                                                <td
                                                    class="month-picker__cell"
                                                    class:month-picker__cell--selected=is_selected
                                                    on:click=move |_| select_cell(row, col)
                                                >
                                                    {name}
                                                </td>
                                            }
                                        }).collect_view()}
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
