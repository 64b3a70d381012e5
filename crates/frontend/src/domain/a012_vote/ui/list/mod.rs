use crate::shared::components::{Column, RecordListPage, RecordListState};
use crate::shared::list_utils::SortField;
use contracts::domain::a012_vote::{Vote, VoteTally};
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn VoteList() -> impl IntoView {
    let state = RecordListState::<Vote>::new();
    let tally = Memo::new(move |_| state.items.with(|votes| VoteTally::from_votes(votes)));

    let columns = vec![
        Column::new("Квартира", |v: &Vote| v.apartment_number.clone()),
        Column::new("Собственник", |v: &Vote| v.voter.clone()),
        Column::new("Площадь, м²", |v: &Vote| format_amount(v.area)),
        Column::new("Доля, %", |v: &Vote| v.ownership_percentage.to_string()),
        Column::new("Голос", |v: &Vote| v.vote_type.label().to_string()),
    ];
    let sort_fields = vec![
        SortField::new("Apartment", "Квартира", |v: &Vote| v.apartment_number.clone()),
        SortField::new("Voter", "Собственник", |v: &Vote| v.voter.clone()),
        SortField::new("Vote", "Голос", |v: &Vote| v.vote_type.label().to_string()),
    ];

    view! {
        <RecordListPage columns=columns sort_fields=sort_fields state=state>
            <div class="vote-tally">
                <span class="vote-tally__item vote-tally__item--agree">
                    "За: " {move || format_amount(tally.get().agree)}
                </span>
                <span class="vote-tally__item vote-tally__item--disagree">
                    "Против: " {move || format_amount(tally.get().disagree)}
                </span>
                <span class="vote-tally__item">
                    "Воздержались: " {move || format_amount(tally.get().abstained)}
                </span>
                <span class="vote-tally__item vote-tally__item--total">
                    "Всего, м²: " {move || format_amount(tally.get().total())}
                </span>
            </div>
        </RecordListPage>
    }
}
