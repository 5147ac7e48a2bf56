//! Loan commands

use clap::{Args, Subcommand};

use library_admin::{
    forms::{format_brl, FieldValue, LoanForm},
    models::{page::DEFAULT_PAGE_SIZE, Loan, PageRequest},
    AdminApp, AppResult,
};

use super::{or_dash, print_json, print_pager, session};

#[derive(Subcommand)]
pub enum LoanCommand {
    /// List loans
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,

        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },

    /// Show one loan
    Show { book: i64, loan: i64 },

    /// Open a loan, or edit it when --id is given
    Save(LoanArgs),

    /// Record the return of the borrowed book
    Return { book: i64, loan: i64 },

    /// Delete a loan
    Delete { book: i64, loan: i64 },
}

#[derive(Args)]
pub struct LoanArgs {
    /// Loan to edit; omitted to open a new one
    #[arg(long)]
    id: Option<i64>,

    /// Borrowed book
    #[arg(long)]
    book: i64,

    #[arg(long, conflicts_with = "client_document")]
    client: Option<i64>,

    /// Find the borrower by identity document
    #[arg(long)]
    client_document: Option<String>,

    /// Estimated return date (YYYY-MM-DD)
    #[arg(long)]
    return_date: Option<String>,

    /// Interest rate per day, e.g. "R$ 0,50"
    #[arg(long)]
    interest_rate: Option<String>,
}

pub async fn run(app: &AdminApp, command: LoanCommand, json: bool) -> AppResult<()> {
    session::require(app).await?;
    let loans = &app.services.loans;

    match command {
        LoanCommand::List { page, size } => {
            let page = loans.list_loans(&PageRequest::new(page, size)).await?;
            if json {
                return print_json(&page);
            }
            for loan in &page.content {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    loan.loan_id,
                    or_dash(loan.loan_start_date.as_deref()),
                    or_dash(loan.estimate_loan_return_date.as_deref()),
                    or_dash(loan.book_title.as_deref()),
                    loan.total_loan_cost.map(format_brl).unwrap_or_else(|| "-".into()),
                );
            }
            print_pager(&page);
        }
        LoanCommand::Show { book, loan } => {
            let loan = loans.get_loan(book, loan).await?;
            if json {
                return print_json(&loan);
            }
            print_loan(&loan);
        }
        LoanCommand::Save(args) => {
            let mut form = match args.id {
                Some(id) => prefill(&loans.get_loan(args.book, id).await?),
                None => LoanForm::default(),
            };
            form.book_id = Some(args.book);

            if let Some(document) = &args.client_document {
                let client = app.services.clients.find_by_document(document).await?;
                form.client_id = Some(client.client_id);
            }
            if args.client.is_some() {
                form.client_id = args.client;
            }
            if let Some(date) = args.return_date {
                form.estimate_loan_return_date = date;
            }
            if let Some(rate) = args.interest_rate {
                form.interest_rate_per_day = FieldValue::Text(rate);
            }

            let saved = loans.save_loan(args.id, &form).await?;
            if json {
                return print_json(&saved);
            }
            match (args.id, saved) {
                (Some(id), _) => println!("Loan {} updated", id),
                (None, Some(loan)) => println!("Loan {} opened", loan.loan_id),
                (None, None) => println!("Loan opened"),
            }
        }
        LoanCommand::Return { book, loan } => {
            let returned = loans.return_loan(book, loan).await?;
            if json {
                return print_json(&returned);
            }
            println!("Book {} returned (loan {})", book, loan);
            if let Some(cost) = returned.and_then(|l| l.total_loan_cost) {
                println!("Total cost: {}", format_brl(cost));
            }
        }
        LoanCommand::Delete { book, loan } => {
            loans.delete_loan(book, loan).await?;
            println!("Loan {} deleted", loan);
        }
    }
    Ok(())
}

fn prefill(loan: &Loan) -> LoanForm {
    LoanForm {
        book_id: loan.book.as_ref().map(|b| b.book_id),
        client_id: loan.client.as_ref().map(|c| c.client_id),
        estimate_loan_return_date: loan
            .estimate_loan_return_date
            .as_deref()
            .map(|d| d.chars().take(10).collect())
            .unwrap_or_default(),
        interest_rate_per_day: loan
            .interest_rate_per_day
            .map(FieldValue::Number)
            .unwrap_or_default(),
    }
}

fn print_loan(loan: &Loan) {
    let client = loan
        .client
        .as_ref()
        .map(|c| {
            format!(
                "{} - {}",
                c.name.as_deref().unwrap_or("?"),
                c.document.as_deref().unwrap_or("?")
            )
        })
        .unwrap_or_else(|| "-".into());

    println!("Loan #{}", loan.loan_id);
    println!("  Book:          {}", or_dash(loan.book_title.as_deref()));
    println!("  Client:        {}", client);
    println!("  Started:       {}", or_dash(loan.loan_start_date.as_deref()));
    println!("  Due:           {}", or_dash(loan.estimate_loan_return_date.as_deref()));
    println!(
        "  Returned:      {}",
        loan.loan_return_date.as_deref().unwrap_or("not returned")
    );
    println!("  Status:        {}", or_dash(loan.loan_status.as_deref()));
    println!(
        "  Days:          {}",
        loan.loan_days.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
    );
    println!(
        "  Total cost:    {}",
        loan.total_loan_cost.map(format_brl).unwrap_or_else(|| "-".into())
    );
}
