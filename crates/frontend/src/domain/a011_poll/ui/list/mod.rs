use crate::shared::components::{Column, RecordListPage};
use crate::shared::date_utils::format_api_date;
use crate::shared::list_utils::SortField;
use contracts::domain::a011_poll::Poll;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn PollList() -> impl IntoView {
    let columns = vec![
        Column::new("Вопрос", |p: &Poll| p.title.clone()),
        Column::new("Дата", |p: &Poll| format_api_date(&p.time)),
    ];
    let sort_fields = vec![
        SortField::new("Title", "Вопрос", |p: &Poll| p.title.clone()),
        SortField::new("Time", "Дата", |p: &Poll| p.time.clone()),
    ];

    view! { <RecordListPage columns=columns sort_fields=sort_fields /> }
}
