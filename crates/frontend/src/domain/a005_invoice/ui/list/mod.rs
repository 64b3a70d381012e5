use crate::domain::a005_invoice::ui::details::InvoiceDetails;
use crate::shared::components::{Column, MonthPicker, RecordListPage, RecordListState};
use crate::shared::date_utils::format_api_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use chrono::NaiveDate;
use contracts::domain::a005_invoice::Invoice;
use contracts::domain::common::Record;
use contracts::shared::calendar::YearMonth;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

/// Счета за выбранный расчётный месяц; без периода возвращаются все
fn invoices_in_period(items: &[Invoice], period: Option<YearMonth>) -> Vec<Invoice> {
    match period {
        Some(period) => items
            .iter()
            .filter(|invoice| invoice.is_in_period(period))
            .cloned()
            .collect(),
        None => items.to_vec(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let state = RecordListState::<Invoice>::new();
    let period = RwSignal::new(None::<YearMonth>);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |invoice: Option<Invoice>| {
        state.open_details(
            modal_stack,
            "invoice-details-modal",
            invoice.map(|i| i.id),
            |id, on_saved, on_cancel| {
                view! { <InvoiceDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let scope = Signal::derive(move || {
        let period = period.get();
        state.items.with(|items| invoices_in_period(items, period))
    });

    let columns = vec![
        Column::new("Период", |i: &Invoice| format_api_date(&i.date)),
        Column::new("Лицевой счёт", |i: &Invoice| i.account_number.clone()),
        Column::new("Услуга", |i: &Invoice| i.invoice_type.label().to_string()),
        Column::new("Показание", |i: &Invoice| i.indicator.to_string()),
        Column::new("К оплате", |i: &Invoice| format_amount(i.total)),
        Column::new("Плательщик", |i: &Invoice| i.payer.clone()),
    ];
    let sort_fields = vec![
        SortField::new("Date", "Период", |i: &Invoice| i.sort_key()),
        SortField::new("Account", "Лицевой счёт", |i: &Invoice| i.account_number.clone()),
        SortField::new("Payer", "Плательщик", |i: &Invoice| i.payer.clone()),
    ];

    view! {
        <RecordListPage
            columns=columns
            sort_fields=sort_fields
            state=state
            scope=scope
            on_open=Callback::new(open_details)
        >
            <div class="filter-panel__period">
                <span class="filter-panel__label">"Период:"</span>
                <MonthPicker
                    value=period
                    on_change=move |first_day: NaiveDate| {
                        period.set(Some(YearMonth::from_date(first_day)))
                    }
                    placeholder="Все месяцы"
                />
                <Show when=move || period.get().is_some()>
                    <button
                        class="button button--secondary"
                        title="Сбросить период"
                        on:click=move |_| period.set(None)
                    >
                        {icon("x")}
                    </button>
                </Show>
            </div>
        </RecordListPage>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::calendar::Month;

    fn invoice(date: &str) -> Invoice {
        Invoice {
            apartment_id: "a1".into(),
            account_number: "1001".into(),
            date: date.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_invoices_in_period() {
        let items = vec![
            invoice("2024-03-01T00:00:00Z"),
            invoice("2024-04-01T00:00:00Z"),
            invoice("2023-03-01T00:00:00Z"),
        ];
        let march = YearMonth::new(2024, Month::new(2).unwrap());

        let filtered = invoices_in_period(&items, Some(march));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, "2024-03-01T00:00:00Z");
        assert_eq!(invoices_in_period(&items, None).len(), 3);
    }
}
