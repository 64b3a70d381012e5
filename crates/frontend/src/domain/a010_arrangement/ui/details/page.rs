use super::view_model::ArrangementDetailsVm;
use crate::shared::components::DayPicker;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a009_payment::Payment;
use contracts::shared::format::format_amount;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ArrangementDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ArrangementDetailsVm::new(today());
    vm.load_payments();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let exceeds_balance = vm.exceeds_balance();
    let error = vm.error;
    let payments = vm.payments;
    let date = vm.date;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Платёж" } else { "Новый платёж" }}
                    </h1>
                    <Show when=move || exceeds_balance.get()>
                        <span class="badge badge--warning">"Сумма больше остатка на счёте"</span>
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
                        <label class="form__label">"Счёт списания *"</label>
                        <Select value=vm.payment_id>
                            <option value="">"-- Выберите счёт --"</option>
                            <For
                                each=move || payments.get()
                                key=|p: &Payment| p.id.clone()
                                children=move |p: Payment| view! {
                                    <option value=p.id.clone()>
                                        {format!("{} ({})", p.title, format_amount(p.balance))}
                                    </option>
                                }
                            />
                        </Select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Номер *"</label>
                        <Input value=vm.arrangement_number />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Назначение"</label>
                        <Input value=vm.title />
                    </div>

                    <div class="form__group">
                        <DayPicker
                            label="Дата"
                            value=date
                            on_change=move |picked: NaiveDate| date.set(Some(picked))
                            required=true
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"IBAN получателя"</label>
                        <Input value=vm.iban placeholder="UA..." />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"МФО получателя"</label>
                        <Input value=vm.sort_code />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Сумма *"</label>
                        <Input value=vm.total />
                    </div>

                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Описание"</label>
                        <Textarea value=vm.description attr:rows=2 />
                    </div>
                </div>
            </div>
        </div>
    }
}
