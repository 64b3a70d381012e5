use crate::shared::components::{Column, RecordListPage};
use crate::shared::date_utils::format_api_date;
use crate::shared::list_utils::SortField;
use contracts::domain::a013_publication::Publication;
use contracts::domain::common::Record;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn PublicationList() -> impl IntoView {
    let columns = vec![
        Column::new("Заголовок", |p: &Publication| p.title.clone()),
        Column::new("Опубликовано", |p: &Publication| format_api_date(&p.time)),
    ];
    let sort_fields = vec![
        SortField::new("Time", "Дата публикации", |p: &Publication| p.sort_key()),
        SortField::new("Title", "Заголовок", |p: &Publication| p.title.clone()),
    ];

    view! { <RecordListPage columns=columns sort_fields=sort_fields /> }
}
