use super::view_model::ToolDetailsVm;
use crate::shared::components::DayPicker;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::enums::Currency;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ToolDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ToolDetailsVm::new();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let is_expired = vm.is_expired(today());
    let error = vm.error;
    let purchased_on = vm.purchased_on;
    let expires_on = vm.expires_on;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Инвентарь" } else { "Новый инвентарь" }}
                    </h1>
                    <Show when=move || is_expired.get()>
                        <span class="badge badge--warning">"Срок службы истёк"</span>
                    </Show>
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
                        <label class="form__label">"Инвентарный номер *"</label>
                        <Input value=vm.tool_number />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Название *"</label>
                        <Input value=vm.title />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Стоимость"</label>
                        <Input value=vm.cost />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Валюта"</label>
                        <Select value=vm.currency>
                            {Currency::all()
                                .into_iter()
                                .map(|c| view! { <option value=c.code().to_string()>{c.label()}</option> })
                                .collect_view()}
                        </Select>
                    </div>

                    <div class="form__group">
                        <DayPicker
                            label="Дата покупки *"
                            value=purchased_on
                            on_change=move |date: NaiveDate| purchased_on.set(Some(date))
                            required=true
                        />
                    </div>

                    <div class="form__group">
                        <DayPicker
                            label="Срок службы до"
                            value=expires_on
                            on_change=move |date: NaiveDate| expires_on.set(Some(date))
                        />
                    </div>

                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Примечание"</label>
                        <Textarea value=vm.remark attr:rows=2 />
                    </div>
                </div>
            </div>
        </div>
    }
}
