use super::view_model::SnapshotDetailsVm;
use crate::shared::components::{DayPicker, MonthPicker};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a001_building::Building;
use contracts::shared::calendar::YearMonth;
use contracts::shared::format::format_amount;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SnapshotDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SnapshotDetailsVm::new();
    vm.load_lookups();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let amount = vm.amount();
    let error = vm.error;
    let buildings = vm.buildings;
    let period = vm.period;
    let pay_to = vm.pay_to;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Расчётный период" } else { "Новый расчётный период" }}
                    </h1>
                    <span class="badge">{move || format!("Начислено: {}", format_amount(amount.get()))}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_save
                        disabled=is_save_disabled
                    >
                        {icon("save")} " Сохранить"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        {icon("x")} " Закрыть"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

                <div class="details-grid--2col">
                    <div class="form__group">
                        <label class="form__label">"Дом *"</label>
                        <Select value=vm.building_id>
                            <option value="">"-- Выберите дом --"</option>
                            <For
                                each=move || buildings.get()
                                key=|b: &Building| b.id.clone()
                                children=move |b: Building| view! { <option value=b.id.clone()>{b.legal_address.clone()}</option> }
                            />
                        </Select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Расчётный месяц *"</label>
                        <MonthPicker
                            value=period
                            on_change=move |first_day: NaiveDate| {
                                period.set(Some(YearMonth::from_date(first_day)))
                            }
                        />
                    </div>

                    <div class="form__group">
                        <DayPicker
                            label="Оплатить до *"
                            value=pay_to
                            on_change=move |date: NaiveDate| pay_to.set(Some(date))
                            required=true
                        />
                    </div>

                    <div class="form__group">
                        <Checkbox checked=vm.is_completed label="Период закрыт"/>
                    </div>
                </div>
            </div>
        </div>
    }
}
