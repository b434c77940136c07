//! City list, detail, and form pages.

use cities_core::city::form::{CityForm, FormDescriptor, FormMode, Presentation};
use cities_core::city::{CityFormValues, FieldErrors, CITIES_PATH};
use cities_db::models::city::City;
use serde::Serialize;

use crate::flash::Flash;
use crate::views::Page;

pub const INDEX: &str = "Cities/Index";
pub const SHOW: &str = "Cities/Show";
pub const CREATE: &str = "Cities/Create";
pub const EDIT: &str = "Cities/Edit";

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// How a grid cell renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Text,
    Date,
    /// Edit and delete buttons for the row.
    Actions,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridColumn {
    pub field: &'static str,
    pub header_name: &'static str,
    pub flex: f32,
    pub min_width: u32,
    pub sortable: bool,
    pub filter: bool,
    pub cell: CellKind,
}

/// Column layout and empty state of the city list.
#[derive(Debug, Clone, Serialize)]
pub struct GridDescriptor {
    pub columns: Vec<GridColumn>,
    pub no_rows_text: &'static str,
    pub row_height: u32,
    pub header_height: u32,
}

fn city_grid() -> GridDescriptor {
    GridDescriptor {
        columns: vec![
            GridColumn {
                field: "name",
                header_name: "City Name",
                flex: 1.0,
                min_width: 200,
                sortable: true,
                filter: true,
                cell: CellKind::Text,
            },
            GridColumn {
                field: "created_at",
                header_name: "Created Date",
                flex: 1.0,
                min_width: 180,
                sortable: true,
                filter: true,
                cell: CellKind::Date,
            },
            GridColumn {
                field: "actions",
                header_name: "Actions",
                flex: 0.8,
                min_width: 140,
                sortable: false,
                filter: false,
                cell: CellKind::Actions,
            },
        ],
        no_rows_text: "No cities found",
        row_height: 44,
        header_height: 40,
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct IndexProps {
    pub cities: Vec<City>,
    pub grid: GridDescriptor,
}

#[derive(Debug, Serialize)]
pub struct ShowProps {
    pub city: City,
}

#[derive(Debug, Serialize)]
pub struct CreateProps {
    pub form: FormDescriptor,
}

#[derive(Debug, Serialize)]
pub struct EditProps {
    pub city: City,
    pub form: FormDescriptor,
}

pub fn index(cities: Vec<City>, flash: Option<Flash>) -> Page<IndexProps> {
    let props = IndexProps {
        cities,
        grid: city_grid(),
    };
    Page::new(INDEX, CITIES_PATH, props).with_flash(flash)
}

pub fn show(city: City, flash: Option<Flash>) -> Page<ShowProps> {
    let url = format!("{CITIES_PATH}/{}", city.id);
    Page::new(SHOW, url, ShowProps { city }).with_flash(flash)
}

/// The create page, either blank or re-rendered after a rejected submit.
pub fn create(form: &CityForm, flash: Option<Flash>) -> Page<CreateProps> {
    let props = CreateProps {
        form: form.descriptor(),
    };
    Page::new(CREATE, format!("{CITIES_PATH}/create"), props)
        .with_flash(flash)
        .with_errors(form.errors().clone())
}

/// The edit page, pre-filled from `city` unless a rejected form is given.
pub fn edit(city: City, form: &CityForm, flash: Option<Flash>) -> Page<EditProps> {
    let url = format!("{CITIES_PATH}/{}/edit", city.id);
    let props = EditProps {
        form: form.descriptor(),
        city,
    };
    Page::new(EDIT, url, props)
        .with_flash(flash)
        .with_errors(form.errors().clone())
}

/// A blank full-page create form.
pub fn blank_form() -> CityForm {
    CityForm::create(Presentation::Page)
}

/// A full-page edit form holding the city's stored values.
pub fn edit_form(city: &City) -> CityForm {
    CityForm::edit(Presentation::Page, city.id, &city.name)
}

/// A form holding what the user submitted plus the errors it produced.
pub fn rejected_form(mode: FormMode, values: CityFormValues, errors: FieldErrors) -> CityForm {
    CityForm::rejected(mode, Presentation::Page, values, errors)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn city(id: i64, name: &str) -> City {
        let now = Utc::now();
        City {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn index_lists_cities_with_grid() {
        let page = index(vec![city(1, "Springfield")], None);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["component"], "Cities/Index");
        assert_eq!(json["url"], "/cities");
        assert_eq!(json["props"]["cities"][0]["name"], "Springfield");
        assert_eq!(json["props"]["grid"]["columns"][0]["header_name"], "City Name");
        assert_eq!(json["props"]["grid"]["no_rows_text"], "No cities found");
        assert!(json["flash"].is_null());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn index_shows_flash() {
        let page = index(vec![], Some(Flash::CityDeleted));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["flash"]["success"], "City deleted successfully");
    }

    #[test]
    fn edit_page_prefills_form() {
        let c = city(3, "Shelbyville");
        let form = edit_form(&c);
        let json = serde_json::to_value(edit(c, &form, None)).unwrap();
        assert_eq!(json["url"], "/cities/3/edit");
        assert_eq!(json["props"]["form"]["action"], "/cities/3");
        assert_eq!(json["props"]["form"]["fields"][0]["value"], "Shelbyville");
    }

    #[test]
    fn rejected_create_carries_values_and_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "City name is required");
        let form = rejected_form(FormMode::Create, CityFormValues::new(""), errors);
        let json = serde_json::to_value(create(&form, None)).unwrap();
        assert_eq!(json["errors"]["name"], "City name is required");
        assert_eq!(
            json["props"]["form"]["fields"][0]["error"],
            "City name is required"
        );
    }
}
