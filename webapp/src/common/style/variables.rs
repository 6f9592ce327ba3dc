pub const CSS_VARIABLES: &str = r#"
:root,
[data-theme="light"] {
  /* Color System */
  --primary: #18181B;          /* Brand bar and primary actions */
  --primary-foreground: #FAFAFA;
  --secondary: #F4F4F5;
  --secondary-foreground: #18181B;
  --accent: #F4F4F5;           /* Hover wash for ghost buttons and menu rows */

  /* Neutrals */
  --neutral-50: #FAFAFA;
  --neutral-100: #F4F4F5;
  --neutral-200: #E4E4E7;
  --neutral-400: #A1A1AA;
  --neutral-500: #71717A;
  --neutral-800: #27272A;
  --neutral-900: #18181B;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --surface: #FFFFFF;
  --muted: var(--neutral-100);
  --overlay: rgba(0, 0, 0, 0.8);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);
  --ring: var(--neutral-400);

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
}

[data-theme="dark"] {
  --primary: #FAFAFA;
  --primary-foreground: #18181B;
  --secondary: #27272A;
  --secondary-foreground: #FAFAFA;
  --accent: #27272A;

  --background: #09090B;
  --surface: #09090B;
  --muted: var(--neutral-800);

  --text-primary: var(--neutral-50);
  --text-secondary: var(--neutral-400);

  --border: var(--neutral-800);
  --ring: var(--neutral-500);

  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.4);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.5), 0 4px 6px -2px rgba(0, 0, 0, 0.3);
}

:root {
  /* Layout */
  --container-width: 72rem;
  --sheet-width: 240px;
  --sheet-width-sm: 300px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;

  /* Animation */
  --transition-fast: 150ms;
  --transition-slow: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
