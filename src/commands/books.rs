//! Book catalog commands

use clap::{Args, Subcommand};

use library_admin::{
    forms::{format_brl, BookForm, FieldValue},
    models::{page::DEFAULT_PAGE_SIZE, Book, Genre, PageRequest},
    AdminApp, AppResult,
};

use super::{or_dash, print_json, print_pager, session};

#[derive(Subcommand)]
pub enum BookCommand {
    /// List books, optionally searching by title
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,

        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,

        #[arg(long)]
        title: Option<String>,
    },

    /// Show one book with its loans
    Show { id: i64 },

    /// Create a book, or update it when --id is given
    Save(BookArgs),

    /// Delete a book
    Delete { id: i64 },

    /// List the accepted genre codes
    Genres,
}

#[derive(Args)]
pub struct BookArgs {
    /// Book to update; omitted to create a new one
    #[arg(long)]
    id: Option<i64>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    publisher: Option<String>,
    #[arg(long)]
    genre: Option<String>,
    #[arg(long)]
    language: Option<String>,
    #[arg(long)]
    synopsis: Option<String>,
    #[arg(long)]
    edition: Option<String>,
    /// Daily price, e.g. "R$ 2,50"
    #[arg(long)]
    price_per_day: Option<String>,
    #[arg(long)]
    available_stock: Option<String>,
    #[arg(long)]
    publish_year: Option<String>,
    /// Purchase cost, e.g. "R$ 1.234,56"
    #[arg(long)]
    purchase_cost: Option<String>,
}

impl BookArgs {
    /// Apply the given flags on top of `form`.
    fn apply(self, form: &mut BookForm) {
        let text = |target: &mut String, value: Option<String>| {
            if let Some(v) = value {
                *target = v;
            }
        };
        let amount = |target: &mut FieldValue, value: Option<String>| {
            if let Some(v) = value {
                *target = FieldValue::Text(v);
            }
        };

        text(&mut form.title, self.title);
        text(&mut form.author, self.author);
        text(&mut form.publisher, self.publisher);
        text(&mut form.genre, self.genre.map(|g| g.to_uppercase()));
        text(&mut form.language, self.language);
        text(&mut form.synopsis, self.synopsis);
        text(&mut form.edition, self.edition);
        amount(&mut form.price_per_day, self.price_per_day);
        amount(&mut form.available_stock, self.available_stock);
        amount(&mut form.publish_year, self.publish_year);
        amount(&mut form.purchase_cost, self.purchase_cost);
    }
}

pub async fn run(app: &AdminApp, command: BookCommand, json: bool) -> AppResult<()> {
    if let BookCommand::Genres = command {
        for genre in Genre::ALL {
            println!("{}", genre);
        }
        return Ok(());
    }

    session::require(app).await?;
    let catalog = &app.services.catalog;

    match command {
        BookCommand::List { page, size, title } => {
            let mut request = PageRequest::new(page, size);
            if let Some(title) = title {
                request = request.with_search(title);
            }
            let books = catalog.list_books(&request).await?;
            if json {
                return print_json(&books);
            }
            for book in &books.content {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    book.book_id,
                    book.title,
                    book.author,
                    or_dash(book.genre.as_deref()),
                    book.available_stock.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
                );
            }
            print_pager(&books);
        }
        BookCommand::Show { id } => {
            let book = catalog.get_book(id).await?;
            if json {
                return print_json(&book);
            }
            print_book(&book);
        }
        BookCommand::Save(args) => {
            let id = args.id;
            let mut form = match id {
                Some(id) => BookForm::from(&catalog.get_book(id).await?),
                None => BookForm::default(),
            };
            args.apply(&mut form);

            let saved = catalog.save_book(id, &form).await?;
            if json {
                return print_json(&saved);
            }
            match (id, saved) {
                (Some(id), _) => println!("Book {} updated", id),
                (None, Some(book)) => println!("Book {} created", book.book_id),
                (None, None) => println!("Book created"),
            }
        }
        BookCommand::Delete { id } => {
            catalog.delete_book(id).await?;
            println!("Book {} deleted", id);
        }
        BookCommand::Genres => {}
    }
    Ok(())
}

fn print_book(book: &Book) {
    let money = |v: Option<f64>| v.map(format_brl).unwrap_or_else(|| "-".into());

    println!("#{} {}", book.book_id, book.title);
    println!("  Author:        {}", book.author);
    println!("  Publisher:     {}", book.publisher);
    println!("  Genre:         {}", or_dash(book.genre.as_deref()));
    println!("  Language:      {}", or_dash(book.language.as_deref()));
    println!("  Edition:       {}", or_dash(book.edition.as_deref()));
    println!(
        "  Published:     {}",
        book.publish_year.map(|y| y.to_string()).unwrap_or_else(|| "-".into())
    );
    println!(
        "  Stock:         {}",
        book.available_stock.map(|s| s.to_string()).unwrap_or_else(|| "-".into())
    );
    println!("  Price per day: {}", money(book.price_per_day));
    println!("  Purchase cost: {}", money(book.purchase_cost));
    println!("  Total profit:  {}", money(book.total_profit));

    if !book.loans.is_empty() {
        println!("  Loans:");
        for loan in &book.loans {
            println!(
                "    {}\t{}\t{}\t{}\t{}",
                loan.loan_id,
                or_dash(loan.loan_start_date.as_deref()),
                or_dash(loan.estimate_loan_return_date.as_deref()),
                money(loan.total_loan_cost),
                or_dash(loan.loan_status.as_deref()),
            );
        }
    }
}
