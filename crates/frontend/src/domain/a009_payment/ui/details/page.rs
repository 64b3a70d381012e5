use super::view_model::PaymentDetailsVm;
use crate::shared::components::CodeSelect;
use crate::shared::icons::icon;
use contracts::enums::{Currency, PaymentType};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PaymentDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PaymentDetailsVm::new();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let error = vm.error;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Банковский счёт" } else { "Новый банковский счёт" }}
                    </h1>
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
                        <label class="form__label">"Название *"</label>
                        <Input value=vm.title />
                    </div>

                    <CodeSelect label="Тип счёта" value=vm.payment_type options=PaymentType::options() />

                    <div class="form__group">
                        <label class="form__label">"IBAN *"</label>
                        <Input value=vm.iban placeholder="UA..." />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"МФО"</label>
                        <Input value=vm.sort_code />
                    </div>

                    <CodeSelect label="Валюта" value=vm.currency options=Currency::options() />

                    <div class="form__group">
                        <label class="form__label">"Остаток"</label>
                        <Input value=vm.balance />
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
