//! Выбор даты: поле с выпадающим календарём месяца.
//!
//! Сетка 6×7 строится `contracts::shared::calendar::day_grid`, неделя
//! начинается с понедельника. Стрелки листают месяцы.

use crate::shared::date_utils::{month_title, today, WEEKDAY_INITIALS};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::shared::calendar::{day_grid, YearMonth};
use contracts::shared::format::format_date;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DayPicker(
    /// Выбранная дата
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    /// Вызывается при клике по дню
    #[prop(into)]
    on_change: Callback<NaiveDate>,
    #[prop(optional, into)] label: String,
    /// Пустое значение после закрытия календаря показывает подсказку
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let touched = RwSignal::new(false);
    let cursor = RwSignal::new(YearMonth::from_date(
        value.get_untracked().unwrap_or_else(today),
    ));

    let toggle = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if open.get_untracked() {
            touched.set(true);
        } else if let Some(date) = value.get_untracked() {
            // Календарь открывается на месяце выбранной даты
            cursor.set(YearMonth::from_date(date));
        }
        open.update(|o| *o = !*o);
    };

    let select_day = move |day: u32| {
        if let Some(date) = cursor.get_untracked().date(day) {
            on_change.run(date);
            touched.set(true);
            open.set(false);
        }
    };

    let show_error = move || required && touched.get() && value.get().is_none();
    let display = move || value.get().map(format_date).unwrap_or_default();

    view! {
        <div class="day-picker" class:day-picker--disabled=move || disabled.get()>
            {(!label.is_empty()).then(|| view! {
                <label class="form__label">
                    {label.clone()}
                    {required.then_some(" *")}
                </label>
            })}
            <div class="day-picker__field" on:click=toggle>
                <input
                    type="text"
                    class="day-picker__input"
                    class:day-picker__input--error=show_error
                    readonly=true
                    placeholder="дд.мм.гг"
                    prop:value=display
                    prop:disabled=move || disabled.get()
                />
                {icon("calendar")}
            </div>

            <Show when=move || open.get()>
                <div class="day-picker__dropdown">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| cursor.update(|c| *c = c.previous())
                        >
                            {icon("chevron-left")}
                        </Button>
                        <span class="day-picker__title">{move || month_title(cursor.get())}</span>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| cursor.update(|c| *c = c.next())
                        >
                            {icon("chevron-right")}
                        </Button>
                    </Flex>

                    <table class="day-picker__grid">
                        <thead>
                            <tr>
                                {WEEKDAY_INITIALS
                                    .into_iter()
                                    .map(|initial| view! { <th class="day-picker__weekday">{initial}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let current = cursor.get();
                                let selected = value.get();
                                let today = today();
                                day_grid(current)
                                    .into_iter()
                                    .map(|week| view! {
                                        <tr>
                                            {week.into_iter().map(|day| {
                                                if day == 0 {
                                                    return view! {
                                                        <td class="day-picker__cell day-picker__cell--empty"></td>
                                                    }
                                                    .into_any();
                                                }
                                                let date = current.date(day);
                                                view! {
                                                    <td
                                                        class="day-picker__cell"
                                                        class:day-picker__cell--selected=date.is_some() && date == selected
                                                        class:day-picker__cell--today=date == Some(today)
                                                        on:click=move |_| select_day(day)
                                                    >
                                                        {day}
                                                    </td>
                                                }
                                                .into_any()
                                            }).collect_view()}
                                        </tr>
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <Show when=show_error>
                <div class="form__hint form__hint--error">"Обязательное поле"</div>
            </Show>
        </div>
    }
}
