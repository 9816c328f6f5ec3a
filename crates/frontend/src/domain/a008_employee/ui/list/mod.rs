use crate::domain::a008_employee::api;
use crate::domain::a008_employee::ui::details::{EmployeeDetails, EmployeeDetailsViewModel};
use crate::shared::api_utils::HttpClient;
use crate::shared::components::badge::{Badge, StatusBadge};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::form_controls::StatusFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, Outcome, RowActions, SearchInput};
use crate::shared::modal::use_modal;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::search_list::SearchList;
use contracts::domain::a008_employee::aggregate::{Employee, RESOURCE};
use contracts::domain::common::EntityId;
use contracts::shared::list_state::ListConfig;
use contracts::shared::search::{PagingKeys, SearchQuery};
use leptos::prelude::*;
use thaw::*;

const DELETE: Outcome = Outcome::fixed("Employee deleted successfully", "Failed to delete employee");

fn search_query(text: String, status: String) -> SearchQuery {
    SearchQuery::new().text("search", text).status("status", status)
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let http = use_context::<HttpClient>().expect("HttpClient not found");
    let modal = use_modal();
    let notify = use_notify();

    let list = SearchList::<Employee>::new(
        RESOURCE,
        ListConfig::new(PagingKeys::PageSize).page_size(config.default_page_size),
        "Failed to load employees",
    );
    list.init();

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let is_filter_expanded = RwSignal::new(false);

    let apply_filters = move || {
        list.set_filter(search_query(search.get_untracked(), status.get_untracked()));
    };
    Effect::new(move |prev: Option<String>| {
        let current = status.get();
        if prev.is_some_and(|p| p != current) {
            list.change_filter(search_query(search.get_untracked(), current.clone()));
        }
        current
    });

    let vm = EmployeeDetailsViewModel::new();
    let editor_open = RwSignal::new(false);
    let on_saved = Callback::new(move |_| {
        editor_open.set(false);
        list.refresh();
    });
    let on_cancel = Callback::new(move |_| editor_open.set(false));

    let handle_edit = move |employee: Employee| {
        vm.edit(&employee);
        editor_open.set(true);
    };
    let handle_delete = move |id: EntityId| {
        confirm_delete(
            modal,
            notify,
            "Are you sure you want to delete this employee?",
            DELETE,
            move || api::delete(http, id),
            Callback::new(move |_| list.refresh()),
        );
    };

    let active_filters_count =
        Signal::derive(move || list.state.with(|s| s.query.active_count()));
    let page_size_options = config.page_size_options.clone();

    view! {
        <PageFrame page_id="a008_employee--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Employees"</h1>
                    <Badge variant="primary">
                        {move || list.window().get().total_elements.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            vm.reset();
                            editor_open.set(true);
                        }
                    >
                        {icon("plus")}
                        " New Employee"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.refresh()
                        disabled=list.loading()
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || editor_open.get()>
                    <EmployeeDetails vm=vm on_saved=on_saved on_cancel=on_cancel />
                </Show>

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    pagination_controls=move || view! {
                        <PaginationControls
                            window=list.window()
                            on_page_change=Callback::new(move |page| list.go_to_page(page))
                            on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                            page_size_options=page_size_options.clone()
                        />
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search"</Label>
                                <SearchInput
                                    value=search
                                    on_change=Callback::new(move |text| {
                                        search.set(text);
                                        apply_filters();
                                    })
                                    placeholder="Name, mobile, department..."
                                />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status"</Label>
                                <StatusFilter value=status />
                            </Flex>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search.set(String::new());
                                    status.set(String::new());
                                    list.reset();
                                }
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Mobile"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Designation"</TableHeaderCell>
                                <TableHeaderCell>"Department"</TableHeaderCell>
                                <TableHeaderCell>"Joined"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|e| (e.id, e.name.clone(), e.mobile_number.clone(), e.status)
                                children=move |employee: Employee| {
                                    let id = employee.id;
                                    let for_edit = employee.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{employee.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{employee.mobile_number.clone()}</TableCell>
                                            <TableCell>{employee.email.clone()}</TableCell>
                                            <TableCell>{employee.designation.clone()}</TableCell>
                                            <TableCell>{employee.department.clone()}</TableCell>
                                            <TableCell>{format_datetime(employee.joining_date.as_deref())}</TableCell>
                                            <TableCell>
                                                <StatusBadge status=employee.status />
                                            </TableCell>
                                            <TableCell>
                                                <RowActions
                                                    on_edit=Callback::new(move |_| handle_edit(for_edit.clone()))
                                                    on_delete=Callback::new(move |_| handle_delete(id))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || list.loaded_empty().get().then(|| view! {
                        <div class="table__empty">"No employees found"</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_status_is_not_sent() {
        let q = search_query("Joshi".into(), String::new());
        let fields = q.to_fields();
        assert_eq!(fields["search"], serde_json::json!("Joshi"));
        assert!(!fields.contains_key("status"));
    }

    #[test]
    fn cleared_filters_match_reset_query() {
        let reset = ListConfig::new(PagingKeys::PageSize).default_query;
        assert!(search_query(String::new(), String::new()).same_filters(&reset));
        assert!(!search_query(String::new(), "I".into()).same_filters(&reset));
    }
}
