use std::collections::HashMap;
use std::sync::LazyLock;

/// Human readable labels for the credit bureau features the classifier uses.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("NETMONTHLYINCOME", "Net Monthly Income"),
    ("Time_With_Curr_Empr", "Employment Tenure"),
    ("CC_Flag", "Credit Card Holder"),
    ("PL_Flag", "Personal Loan Holder"),
    ("HL_Flag", "Home Loan Holder"),
    ("GL_Flag", "Gold Loan Holder"),
    ("EDUCATION", "Education Level"),
    ("MARITALSTATUS_Married", "Married Status"),
    ("MARITALSTATUS_Single", "Single Status"),
    ("GENDER_F", "Female"),
    ("GENDER_M", "Male"),
    // Trade lines
    ("pct_tl_open_L6M", "Percent Total Lines Open (Last 6M)"),
    ("pct_tl_closed_L6M", "Percent Total Lines Closed (Last 6M)"),
    ("Tot_TL_closed_L12M", "Total Lines Closed (Last 12M)"),
    ("pct_tl_closed_L12M", "Percent Total Lines Closed (Last 12M)"),
    ("Tot_Missed_Pmnt", "Total Missed Payments"),
    ("CC_TL", "Credit Card Total Lines"),
    ("Home_TL", "Home Loan Total Lines"),
    ("PL_TL", "Personal Loan Total Lines"),
    ("Secured_TL", "Secured Loan Total Lines"),
    ("Unsecured_TL", "Unsecured Loan Total Lines"),
    ("Other_TL", "Other Loan Total Lines"),
    ("Age_Oldest_TL", "Age of Oldest Trade Line"),
    ("Age_Newest_TL", "Age of Newest Trade Line"),
    // Delinquency
    ("time_since_recent_payment", "Time Since Recent Payment"),
    ("max_recent_level_of_deliq", "Max Recent Delinquency Level"),
    ("num_deliq_6_12mts", "Delinquencies in 6-12 Months"),
    ("num_times_60p_dpd", "Times 60+ Days Past Due"),
    ("num_std_12mts", "Standard Accounts in 12 Months"),
    ("num_sub", "Number of Substandard Accounts"),
    ("num_sub_6mts", "Number of Substandard Accounts (6 Months)"),
    ("num_sub_12mts", "Number of Substandard Accounts (12 Months)"),
    ("num_dbt", "Number of Doubtful Accounts"),
    ("num_dbt_12mts", "Number of Doubtful Accounts (12 Months)"),
    ("num_lss", "Number of Loss Accounts"),
    ("recent_level_of_deliq", "Recent Delinquency Level"),
    // Enquiries
    ("CC_enq_L12m", "Credit Card Inquiries (Last 12M)"),
    ("PL_enq_L12m", "Personal Loan Inquiries (Last 12M)"),
    ("time_since_recent_enq", "Time Since Recent Inquiry"),
    ("enq_L3m", "Inquiries in Last 3 Months"),
    ("pct_PL_enq_L6m_of_ever", "Percent Personal Loan Inquiries (Last 6M)"),
    ("pct_CC_enq_L6m_of_ever", "Percent Credit Card Inquiries (Last 6M)"),
    ("last_prod_enq2_AL", "Last Product Inquiry - Auto Loan"),
    ("last_prod_enq2_CC", "Last Product Inquiry - Credit Card"),
    ("last_prod_enq2_ConsumerLoan", "Last Product Inquiry - Consumer Loan"),
    ("last_prod_enq2_HL", "Last Product Inquiry - Home Loan"),
    ("last_prod_enq2_PL", "Last Product Inquiry - Personal Loan"),
    ("last_prod_enq2_others", "Last Product Inquiry - Others"),
    ("first_prod_enq2_AL", "First Product Inquiry - Auto Loan"),
    ("first_prod_enq2_CC", "First Product Inquiry - Credit Card"),
    ("first_prod_enq2_ConsumerLoan", "First Product Inquiry - Consumer Loan"),
    ("first_prod_enq2_HL", "First Product Inquiry - Home Loan"),
    ("first_prod_enq2_PL", "First Product Inquiry - Personal Loan"),
    ("first_prod_enq2_others", "First Product Inquiry - Others"),
];

static DISPLAY_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| DISPLAY_NAMES.iter().copied().collect());

/// Label shown for `feature`, falling back to the identifier itself.
pub fn display_label(feature: &str) -> &str {
    DISPLAY_LOOKUP.get(feature).copied().unwrap_or(feature)
}
