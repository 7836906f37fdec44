use shared::{PaymentType, SalesField, SalesRow, TimeBlock};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EntryRowProps {
    pub index: usize,
    pub row: SalesRow,
    pub show_ord: bool,
    pub on_edit: Callback<(usize, SalesField, String)>,
}

/// One editable line of the entry grid.
#[function_component(EntryRow)]
pub fn entry_row(props: &EntryRowProps) -> Html {
    let index = props.index;

    let input_handler = |field: SalesField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((index, field, input.value()));
        })
    };
    let select_handler = |field: SalesField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit((index, field, select.value()));
        })
    };

    let time = props.row.text(SalesField::Time);
    let payment = props.row.text(SalesField::Payment);

    html! {
        <tr class="entry-row">
            if props.show_ord {
                <td>
                    <input
                        type="text"
                        class="cell-ord"
                        placeholder={(index + 1).to_string()}
                        value={props.row.text(SalesField::Ord)}
                        oninput={input_handler(SalesField::Ord)}
                    />
                </td>
            }
            <td>
                <select class="cell-time" onchange={select_handler(SalesField::Time)}>
                    <option value="" selected={time.is_empty()}>{"-"}</option>
                    { for TimeBlock::ALL.iter().map(|block| html! {
                        <option value={block.code()} selected={time == block.code()}>
                            { block.code() }
                        </option>
                    }) }
                </select>
            </td>
            <td>
                <input
                    type="number"
                    step="0.01"
                    class="cell-amount"
                    value={props.row.text(SalesField::Amount)}
                    oninput={input_handler(SalesField::Amount)}
                />
            </td>
            <td>
                <select class="cell-payment" onchange={select_handler(SalesField::Payment)}>
                    <option value="" selected={payment.is_empty()}>{"-"}</option>
                    { for PaymentType::ALL.iter().map(|kind| html! {
                        <option value={kind.code()} selected={payment == kind.code()}>
                            { kind.code() }
                        </option>
                    }) }
                </select>
            </td>
            <td>
                <input
                    type="number"
                    class="cell-covers"
                    value={props.row.text(SalesField::Covers)}
                    oninput={input_handler(SalesField::Covers)}
                />
            </td>
        </tr>
    }
}
