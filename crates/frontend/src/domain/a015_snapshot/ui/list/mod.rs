use crate::domain::a015_snapshot::ui::details::SnapshotDetails;
use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::date_utils::{format_api_date, today};
use crate::shared::list_utils::SortField;
use crate::shared::modal_stack::ModalStackService;
use chrono::NaiveDate;
use contracts::domain::a015_snapshot::Snapshot;
use contracts::domain::common::Record;
use leptos::prelude::*;

fn status(snapshot: &Snapshot, today: NaiveDate) -> &'static str {
    if snapshot.is_completed {
        "Закрыт"
    } else if snapshot.is_overdue(today) {
        "Просрочен"
    } else {
        "Открыт"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SnapshotList() -> impl IntoView {
    let state = RecordListState::<Snapshot>::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |snapshot: Option<Snapshot>| {
        state.open_details(
            modal_stack,
            "snapshot-details-modal",
            snapshot.map(|s| s.id),
            |id, on_saved, on_cancel| {
                view! { <SnapshotDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let columns = vec![
        Column::new("Период", |s: &Snapshot| s.title()),
        Column::new("Оплатить до", |s: &Snapshot| format_api_date(&s.pay_to_date)),
        Column::new("Статус", |s: &Snapshot| status(s, today()).to_string()),
    ];
    let sort_fields = vec![
        SortField::new("Date", "Период", |s: &Snapshot| s.sort_key()),
        SortField::new("PayTo", "Оплатить до", |s: &Snapshot| s.pay_to_date.clone()),
    ];

    view! {
        <RecordListPage
            columns=columns
            sort_fields=sort_fields
            state=state
            on_open=Callback::new(open_details)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let mut snapshot = Snapshot {
            building_id: "b1".into(),
            date: "2024-02-01T00:00:00Z".into(),
            pay_to_date: "2024-03-20T00:00:00Z".into(),
            ..Default::default()
        };
        assert_eq!(status(&snapshot, today), "Просрочен");

        snapshot.pay_to_date = "2024-04-20T00:00:00Z".into();
        assert_eq!(status(&snapshot, today), "Открыт");

        snapshot.is_completed = true;
        assert_eq!(status(&snapshot, today), "Закрыт");
    }
}
